//! Status and confirmation message types for operation feedback.

use std::fmt;

/// Confirmation line printed after a record is created.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Created plan 1".to_string());
        assert_eq!(success.to_string(), "Success: Created plan 1\n");

        let failure = OperationStatus::failure("Plan 9 not found".to_string());
        assert!(failure.to_string().starts_with("Error:"));
    }
}
