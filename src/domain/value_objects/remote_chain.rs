//! Ordered remote steps with short-circuit semantics

use std::fmt;

/// Separator that makes each step run only if the previous one exited 0
const AND_THEN: &str = " && ";

/// Remote commands executed in order, stopping at the first failure.
///
/// The chain is sent as one command line to a single remote shell, so
/// state such as the working directory set by a leading `cd` carries over
/// to later steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteChain {
    steps: Vec<String>,
}

impl RemoteChain {
    pub fn new<I, S>(steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            steps: steps.into_iter().map(Into::into).collect(),
        }
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps joined with `&&`, preserving order
    pub fn command_line(&self) -> String {
        self.steps.join(AND_THEN)
    }
}

impl fmt::Display for RemoteChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_steps_join_with_and() {
        let chain = RemoteChain::new(["step1", "step2"]);
        assert_eq!(chain.command_line(), "step1 && step2");
    }

    #[test]
    fn single_step_has_no_separator() {
        let chain = RemoteChain::new(["pm2 restart app"]);
        assert_eq!(chain.command_line(), "pm2 restart app");
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn empty_chain_renders_empty() {
        let chain = RemoteChain::new(Vec::<String>::new());
        assert!(chain.is_empty());
        assert_eq!(chain.command_line(), "");
    }
}
