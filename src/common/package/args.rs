/// Extra command line arguments inserted between the base flags and the action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ExtraArgs {
    #[default]
    Absent,
    /// Appended as exactly one token, even if it contains spaces.
    Single(String),
    /// Appended element by element, in order.
    List(Vec<String>),
}

impl ExtraArgs {
    /// Resolve into the tokens to append. Empty values contribute nothing.
    pub fn into_tokens(self) -> Vec<String> {
        match self {
            ExtraArgs::Absent => Vec::new(),
            ExtraArgs::Single(arg) if arg.is_empty() => Vec::new(),
            ExtraArgs::Single(arg) => vec![arg],
            ExtraArgs::List(args) => args,
        }
    }
}

impl From<&str> for ExtraArgs {
    fn from(arg: &str) -> Self {
        ExtraArgs::Single(arg.to_string())
    }
}

impl From<String> for ExtraArgs {
    fn from(arg: String) -> Self {
        ExtraArgs::Single(arg)
    }
}

impl From<Vec<String>> for ExtraArgs {
    fn from(args: Vec<String>) -> Self {
        ExtraArgs::List(args)
    }
}

impl From<&[&str]> for ExtraArgs {
    fn from(args: &[&str]) -> Self {
        ExtraArgs::List(args.iter().map(|a| a.to_string()).collect())
    }
}

impl<T: Into<ExtraArgs>> From<Option<T>> for ExtraArgs {
    fn from(args: Option<T>) -> Self {
        args.map(Into::into).unwrap_or_default()
    }
}
