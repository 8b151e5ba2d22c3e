pub struct ExecutorOptions {
    /// Cap on plan/act iterations within one turn. `None` disables the cap.
    pub max_iterations: Option<usize>,
    /// When `true`, a failing tool aborts the turn. When `false`, the error
    /// text is fed back to the model as the observation.
    pub break_if_tool_error: bool,
}

impl ExecutorOptions {
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    pub fn without_max_iterations(mut self) -> Self {
        self.max_iterations = None;
        self
    }

    pub fn with_break_if_tool_error(mut self, break_if_tool_error: bool) -> Self {
        self.break_if_tool_error = break_if_tool_error;
        self
    }
}

impl Default for ExecutorOptions {
    fn default() -> Self {
        Self {
            max_iterations: Some(10),
            break_if_tool_error: false,
        }
    }
}
