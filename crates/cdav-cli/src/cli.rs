use cdav_core::types::CollectionType;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "cdav")]
#[command(version)]
#[command(about = "Mint identifiers and slugs for CalDAV/CardDAV resources", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print random identifiers
    Uid {
        #[arg(long)]
        prefix: Option<String>,
        #[arg(long)]
        suffix: Option<String>,
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// Seed the random source for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print object resource names for a collection type
    ObjectName {
        kind: CollectionType,
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Resolve a display name to a free slug
    Slug {
        text: String,
        /// A name that is already in use; may be repeated
        #[arg(long = "taken")]
        taken: Vec<String>,
        /// Highest collision counter to try, overriding configuration
        #[arg(long)]
        max_suffix: Option<u32>,
    },
    /// Print the normalized slug without checking for collisions
    Normalize { text: String },
    /// Check that an identifier has the generated shape
    CheckUid { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uid_defaults() {
        let cli = Cli::try_parse_from(["cdav", "uid"]).unwrap();

        match cli.command {
            Command::Uid {
                prefix,
                suffix,
                count,
                seed,
            } => {
                assert_eq!(prefix, None);
                assert_eq!(suffix, None);
                assert_eq!(count, 1);
                assert_eq!(seed, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_object_name_kind() {
        let cli = Cli::try_parse_from(["cdav", "object-name", "addressbook", "-n", "3"]).unwrap();

        match cli.command {
            Command::ObjectName { kind, count } => {
                assert_eq!(kind, CollectionType::Addressbook);
                assert_eq!(count, 3);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_object_name_rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["cdav", "object-name", "journal"]).is_err());
    }

    #[test]
    fn test_parse_check_uid() {
        let cli = Cli::try_parse_from(["cdav", "check-uid", "NC-ABCDEFGHIJKLMNOP.ICS"]).unwrap();

        match cli.command {
            Command::CheckUid { id } => assert_eq!(id, "NC-ABCDEFGHIJKLMNOP.ICS"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_slug_with_repeated_taken() {
        let cli = Cli::try_parse_from([
            "cdav", "slug", "My Calendar", "--taken", "my-calendar", "--taken", "my-calendar-1",
        ])
        .unwrap();

        match cli.command {
            Command::Slug {
                text,
                taken,
                max_suffix,
            } => {
                assert_eq!(text, "My Calendar");
                assert_eq!(taken, ["my-calendar", "my-calendar-1"]);
                assert_eq!(max_suffix, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
