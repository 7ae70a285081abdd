use anyhow::Result;

/// The host's navigation primitive. Replace-style navigation overwrites
/// the current history entry; assignment pushes a new one.
pub trait Navigator {
    fn replace(&self, target: &str) -> Result<()>;
    fn assign(&self, target: &str) -> Result<()>;

    /// Whether replace-style navigation is available.
    fn supports_replace(&self) -> bool {
        true
    }
}

/// Writes the target address to stdout, leaving the actual navigation to
/// whatever invoked us.
pub struct StdoutNavigator;

impl Navigator for StdoutNavigator {
    fn replace(&self, target: &str) -> Result<()> {
        println!("{target}");
        Ok(())
    }

    fn assign(&self, target: &str) -> Result<()> {
        println!("{target}");
        Ok(())
    }
}
