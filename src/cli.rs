use std::io::{self, Write};

use clap::Parser;
use uuid::Uuid;

use crate::{
    listener,
    publish::{self, PublishRequest},
    target::{ConnectionTarget, DEFAULT_URI},
};

/// Test WebSocket notification service
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// WebSocket URI
    #[arg(long, default_value = DEFAULT_URI)]
    pub uri: String,

    /// User ID (default: random)
    #[arg(long)]
    pub user_id: Option<String>,

    /// Describe publishing a test message instead of connecting
    #[arg(long)]
    pub test_publish: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Fills in a fresh UUID on first call when `--user-id` was omitted; the
    /// same id comes back afterwards.
    pub fn user_id(&mut self) -> &str {
        self.user_id.get_or_insert_with(|| Uuid::new_v4().to_string())
    }
}

/// Runs the simulator or the listener, depending on `--test-publish`.
///
/// Connection problems are printed, not returned; only a failing `out` is an error.
pub async fn dispatch<W: Write>(args: &mut Args, out: &mut W) -> io::Result<()> {
    let user_id = args.user_id().to_owned();

    if args.test_publish {
        return publish::simulate_publish(&PublishRequest::sample(user_id), out);
    }

    writeln!(out, "Connecting to {} as user {user_id}", args.uri)?;

    match ConnectionTarget::new(args.uri.as_str(), user_id) {
        Ok(target) => listener::run(&target, out).await,
        Err(e) => writeln!(out, "Error: {e}")?,
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let mut args = Args::try_parse_from(["notify-probe"]).unwrap();
        assert_eq!(args.uri, "ws://localhost:8081/ws");
        assert!(!args.test_publish);
        assert_eq!(args.verbose, 0);

        let id = args.user_id().to_owned();
        assert!(!id.is_empty());
        assert!(Uuid::parse_str(&id).is_ok());
        assert_eq!(args.user_id(), id);
    }

    #[test]
    fn generated_user_ids_differ() {
        let mut a = Args::try_parse_from(["notify-probe"]).unwrap();
        let mut b = Args::try_parse_from(["notify-probe"]).unwrap();
        assert_ne!(a.user_id(), b.user_id());
    }

    #[test]
    fn explicit_flags() {
        let mut args = Args::try_parse_from([
            "notify-probe",
            "--uri",
            "ws://example.org:9000/ws",
            "--user-id",
            "u1",
            "--test-publish",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.uri, "ws://example.org:9000/ws");
        assert_eq!(args.user_id(), "u1");
        assert!(args.test_publish);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn command_is_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
