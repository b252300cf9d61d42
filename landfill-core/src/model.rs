/// A callable model that maps a typed input to a typed output.
///
/// Models must be deterministic, always producing the same result for a given
/// input. None of the landfill models keep state between calls, so a single
/// instance can be shared freely across threads.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type to represent domain-specific failures.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}
