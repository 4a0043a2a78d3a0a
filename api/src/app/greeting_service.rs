use crate::domain::ports::GreetingService;

pub const DEFAULT_GREETING: &str = "Hello, World";

/// Greets everyone the same way
#[derive(Debug, Clone)]
pub struct StaticGreetingService {
    greeting: String,
}

impl StaticGreetingService {
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            greeting: greeting.into(),
        }
    }
}

impl Default for StaticGreetingService {
    fn default() -> Self {
        Self::new(DEFAULT_GREETING)
    }
}

impl GreetingService for StaticGreetingService {
    fn greet(&self) -> String {
        self.greeting.clone()
    }
}
