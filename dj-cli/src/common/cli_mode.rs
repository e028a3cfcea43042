pub enum CliModeResult {
    /// The mode handled the invocation.
    Finish,
    /// The mode handled the invocation but failed; the user has already been told why.
    Failed,
    NothingToDo,
}
