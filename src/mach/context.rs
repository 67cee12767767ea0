use chrono::{Local, NaiveDateTime};
use std::sync::Arc;

/// Turns a dynamic code block into a number of days.
///
/// Supplied by the embedding application. It is only consulted when
/// `Settings::allow_unsafe_code_execution` is set.
pub trait Evaluate: Send + Sync {
    fn evaluate(&self, code: &str, now: NaiveDateTime) -> Result<f64, String>;
}

impl<F> Evaluate for F
where
    F: Fn(&str, NaiveDateTime) -> Result<f64, String> + Send + Sync,
{
    fn evaluate(&self, code: &str, now: NaiveDateTime) -> Result<f64, String> {
        self(code, now)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Settings {
    pub allow_unsafe_code_execution: bool,
}

/// Everything the interpreter reads besides the query itself.
#[derive(Clone)]
pub struct Context {
    pub now: NaiveDateTime,
    pub settings: Settings,
    evaluator: Option<Arc<dyn Evaluate>>,
}

impl Context {
    pub fn new(now: NaiveDateTime) -> Context {
        Context {
            now,
            settings: Settings::default(),
            evaluator: None,
        }
    }

    pub fn with_settings(self, settings: Settings) -> Context {
        Context { settings, ..self }
    }

    pub fn with_evaluator<E: Evaluate + 'static>(self, evaluator: E) -> Context {
        Context {
            evaluator: Some(Arc::new(evaluator)),
            ..self
        }
    }

    pub fn evaluator(&self) -> Option<&dyn Evaluate> {
        self.evaluator.as_deref()
    }
}

impl Default for Context {
    fn default() -> Context {
        Context::new(Local::now().naive_local())
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("now", &self.now)
            .field("settings", &self.settings)
            .field("evaluator", &self.evaluator.is_some())
            .finish()
    }
}
