use common::types::config::{Config, HandlerKind};
use common::types::{LogMessage, Severity};
use handlers::{DispatchResult, HandlerChain, HandlerId};
use log::{debug, warn};
use std::io::Write;

/// One message, dispatched from the handler responsible for its severity.
pub(crate) struct Dispatch {
    message: LogMessage,
}

impl Dispatch {
    fn new(severity: Severity, text: &str) -> Self {
        Self { message: LogMessage::new(severity, text) }
    }
}

/// The sample messages, in groups. A group stops at the first unrecoverable condition, the next
/// group still runs.
pub(crate) fn sample_groups() -> Vec<Vec<Dispatch>> {
    vec![
        vec![
            Dispatch::new(Severity::Warning, "Warning message"),
            Dispatch::new(Severity::Error, "Error message"),
            Dispatch::new(Severity::FatalError, "Fatal error message"),
        ],
        vec![Dispatch::new(Severity::Unknown, "UNKNOWN")],
    ]
}

/// Builds the configured chain and runs all sample groups through it. Every caught condition is
/// reported on `stderr` as `Exception: <payload>`.
pub(crate) fn run_demo(config: &Config, groups: Vec<Vec<Dispatch>>, stderr: &mut impl Write) -> std::io::Result<()> {
    let (mut chain, ids) = HandlerChain::assemble(config.chain(), config.error_log());

    for group in groups {
        if let Err(err) = dispatch_group(&mut chain, &ids, &group) {
            writeln!(stderr, "Exception: {}", err)?;
        }
    }

    Ok(())
}

fn dispatch_group(chain: &mut HandlerChain, ids: &[(HandlerKind, HandlerId)], group: &[Dispatch]) -> DispatchResult<()> {
    for dispatch in group {
        let severity = dispatch.message.severity();
        let Some(entry) = entry_for(ids, severity) else {
            warn!(target: "main", "No {} handler in the chain, skipping '{}'", severity, dispatch.message.text());
            continue;
        };

        debug!(target: "main", "Dispatching {} message from {}", severity, chain.name_of(entry));
        chain.handle(entry, &dispatch.message)?;
    }
    Ok(())
}

/// The first handler in `ids` that consumes messages of `severity`.
fn entry_for(ids: &[(HandlerKind, HandlerId)], severity: Severity) -> Option<HandlerId> {
    ids.iter()
        .find(|(kind, _)| kind.responsibility() == severity)
        .map(|(_, id)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config_in(dir: &tempfile::TempDir, chain: Vec<HandlerKind>) -> Config {
        Config::Version1 { error_log: dir.path().join("logs.txt"), chain }
    }

    #[test]
    fn test_reference_run() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir, Config::default().chain().to_vec());
        let mut stderr = Vec::new();

        run_demo(&config, sample_groups(), &mut stderr).unwrap();

        assert_eq!(
            String::from_utf8(stderr).unwrap(),
            "Exception: Fatal error message\nException: Unhandled message (UNKNOWN)\n"
        );
        assert_eq!(fs::read_to_string(dir.path().join("logs.txt")).unwrap(), "Error message\n");
    }

    #[test]
    fn test_group_stops_at_first_condition() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir, Config::default().chain().to_vec());
        let groups = vec![vec![
            Dispatch::new(Severity::FatalError, "first"),
            Dispatch::new(Severity::Error, "never written"),
        ]];
        let mut stderr = Vec::new();

        run_demo(&config, groups, &mut stderr).unwrap();

        assert_eq!(String::from_utf8(stderr).unwrap(), "Exception: first\n");
        assert!(!dir.path().join("logs.txt").exists());
    }

    #[test]
    fn test_entry_is_handler_for_severity() {
        let dir = tempfile::tempdir().unwrap();
        let (chain, ids) = HandlerChain::assemble(Config::default().chain(), &dir.path().join("logs.txt"));

        for severity in [Severity::Warning, Severity::Error, Severity::FatalError, Severity::Unknown] {
            let entry = entry_for(&ids, severity).unwrap();
            let kind = ids.iter().find(|(_, id)| *id == entry).map(|(kind, _)| *kind).unwrap();
            assert_eq!(kind.responsibility(), severity);
        }
        assert_eq!(chain.name_of(entry_for(&ids, Severity::Error).unwrap()), "ErrorHandler");
    }

    #[test]
    fn test_missing_entry_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir, vec![HandlerKind::Error]);
        let mut stderr = Vec::new();

        run_demo(&config, sample_groups(), &mut stderr).unwrap();

        assert!(stderr.is_empty());
        assert_eq!(fs::read_to_string(dir.path().join("logs.txt")).unwrap(), "Error message\n");
    }
}
