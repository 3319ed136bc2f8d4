/// Reasons a patient identifier typed by a user is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatientIdError {
    /// The text is not a 32-bit signed integer
    #[error("Invalid Patient ID. Please enter a valid integer.")]
    NotAnInteger,
    /// The integer is zero or negative
    #[error("Invalid Patient ID. Please enter a valid Patient ID greater than 0.")]
    NotPositive,
}

/// A patient identifier that is guaranteed to be a positive integer.
///
/// This is the client-side guard in front of the admissions lookup. The aggregator itself accepts
/// any text and simply finds nothing for malformed ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatientId(i32);

impl PatientId {
    /// Parses user input into a `PatientId`.
    ///
    /// The input is not trimmed: `" 5"` is rejected the same way `"five"` is.
    ///
    /// # Errors
    ///
    /// Returns [`PatientIdError::NotAnInteger`] if `input` does not parse as an `i32`, or
    /// [`PatientIdError::NotPositive`] if it parses to zero or less.
    pub fn parse(input: &str) -> Result<Self, PatientIdError> {
        let value: i32 = input.parse().map_err(|_| PatientIdError::NotAnInteger)?;
        if value <= 0 {
            return Err(PatientIdError::NotPositive);
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for PatientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PatientId {
    type Err = PatientIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_integers() {
        assert_eq!(PatientId::parse("5").map(PatientId::get), Ok(5));
        assert_eq!(PatientId::parse("1").map(PatientId::get), Ok(1));
        assert_eq!(
            PatientId::parse("2147483647").map(PatientId::get),
            Ok(i32::MAX)
        );
    }

    #[test]
    fn rejects_zero_and_negatives() {
        assert_eq!(PatientId::parse("0"), Err(PatientIdError::NotPositive));
        assert_eq!(PatientId::parse("-3"), Err(PatientIdError::NotPositive));
    }

    #[test]
    fn rejects_non_integers() {
        for input in ["", "abc", "2.5", " 5", "%", "99999999999"] {
            assert_eq!(
                PatientId::parse(input),
                Err(PatientIdError::NotAnInteger),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn display_renders_the_integer() {
        let id: PatientId = "42".parse().expect("valid id");
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn error_messages_match_form_wording() {
        assert_eq!(
            PatientIdError::NotAnInteger.to_string(),
            "Invalid Patient ID. Please enter a valid integer."
        );
        assert_eq!(
            PatientIdError::NotPositive.to_string(),
            "Invalid Patient ID. Please enter a valid Patient ID greater than 0."
        );
    }
}
