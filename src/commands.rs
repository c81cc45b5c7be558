//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::config::CalcConfig;

/// Side effects requested by `update`, executed by the runtime
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Re-render the view
    Redraw,
    /// Persist the config (fire-and-forget; failures are only logged)
    SaveConfig(CalcConfig),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Create a batch command from multiple commands
    ///
    /// Filters out None commands and flattens single-command batches.
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut cmds: Vec<Cmd> = cmds
            .into_iter()
            .filter(|c| !matches!(c, Cmd::None))
            .collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw => true,
            Cmd::SaveConfig(_) => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            Cmd::None | Cmd::Quit => false,
        }
    }

    /// Check if this command asks the runtime to stop
    pub fn is_quit(&self) -> bool {
        match self {
            Cmd::Quit => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.is_quit()),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_filters_none() {
        assert_eq!(Cmd::batch(vec![Cmd::None, Cmd::None]), Cmd::None);
        assert_eq!(Cmd::batch(vec![Cmd::None, Cmd::Redraw]), Cmd::Redraw);
    }

    #[test]
    fn test_batch_needs_redraw() {
        let cmd = Cmd::batch(vec![
            Cmd::SaveConfig(CalcConfig::default()),
            Cmd::Redraw,
        ]);
        assert!(matches!(cmd, Cmd::Batch(_)));
        assert!(cmd.needs_redraw());
        assert!(!Cmd::SaveConfig(CalcConfig::default()).needs_redraw());
    }

    #[test]
    fn test_is_quit() {
        assert!(Cmd::Quit.is_quit());
        assert!(Cmd::Batch(vec![Cmd::Redraw, Cmd::Quit]).is_quit());
        assert!(!Cmd::Redraw.is_quit());
    }
}
