//! Application shell
//!
//! Owns the current document, the loading flag, and the single error slot,
//! and wires the form's output through the generator to the renderer and
//! the session store. The state is explicit and instance-scoped; there is
//! no ambient global document.

use eyre::Result;
use tracing::{info, warn};

use crate::config::Config;
use crate::domain::{FormError, FormState, LessonPlan};
use crate::generator::PlanGenerator;
use crate::llm;
use crate::render;
use crate::session::SessionStore;

/// Orchestrates form submission, generation, display, and persistence
pub struct AppShell {
    generator: PlanGenerator,
    session: SessionStore,
    current_plan: Option<LessonPlan>,
    is_loading: bool,
    error_message: Option<String>,
}

impl AppShell {
    /// Construct the shell from configuration
    ///
    /// Fails fast when the service credential is missing; on success the
    /// last session's document, if any, is restored as the current one.
    pub fn new(config: &Config) -> Result<Self> {
        let client = llm::create_client(&config.llm)?;
        Ok(Self::with_parts(
            PlanGenerator::new(client),
            SessionStore::new(&config.storage.data_dir),
        ))
    }

    /// Construct the shell over explicit parts (embedding and tests)
    pub fn with_parts(generator: PlanGenerator, session: SessionStore) -> Self {
        let mut shell = Self {
            generator,
            session,
            current_plan: None,
            is_loading: false,
            error_message: None,
        };
        if let Some(plan) = shell.session.load() {
            info!("with_parts: previous session document restored");
            shell.current_plan = Some(plan);
        }
        shell
    }

    /// The currently displayed document, if any
    pub fn current_plan(&self) -> Option<&LessonPlan> {
        self.current_plan.as_ref()
    }

    /// Whether a generation call is in flight
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The single user-facing error slot
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Report markup for the current document
    pub fn render_current(&self) -> Option<String> {
        self.current_plan.as_ref().map(render::render_html)
    }

    /// Validate the form and, when valid, run one generation call
    ///
    /// An invalid form issues no request and returns the validation error
    /// for the surrounding layer to surface. Before a valid request, the
    /// prior document and error are cleared so neither can display as the
    /// result of the new submission. Generation failures land in the error
    /// slot, replacing any previous message.
    pub async fn submit(&mut self, form: &FormState) -> Result<(), FormError> {
        let input = form.submit()?;

        self.is_loading = true;
        self.error_message = None;
        self.current_plan = None;

        match self.generator.generate(&input).await {
            Ok(plan) => {
                if let Err(e) = self.session.save(&plan) {
                    // Persistence trouble never blocks displaying the result
                    warn!(error = %e, "submit: could not persist document");
                }
                self.current_plan = Some(plan);
            }
            Err(e) => {
                warn!(error = %e, "submit: generation failed");
                self.error_message = Some(e.user_message().to_string());
            }
        }

        self.is_loading = false;
        Ok(())
    }
}
