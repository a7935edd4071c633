/// Catalog snapshot that loaded but failed validation
#[derive(Debug)]
pub struct ValidationError {
    pub errors: Vec<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Validation failed:\n{}", self.errors.join("\n"))
    }
}

impl std::error::Error for ValidationError {}
