use poem_openapi::Object;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn validation(message: &str) -> Self {
        Self {
            name: "ValidationError".to_string(),
            message: message.to_string(),
        }
    }
}
