mod openrouter;

pub use openrouter::{OpenRouterLlm, API_KEY_VAR};
