use thiserror::Error;

pub type CosmoResult<T> = Result<T, CosmoError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CosmoError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Argument outside function domain for {what}: {value}")]
    OutOfDomain { what: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = CosmoError::OutOfDomain {
            what: "arccos",
            value: 1.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("arccos"));
        assert!(msg.contains("1.5"));
    }
}
