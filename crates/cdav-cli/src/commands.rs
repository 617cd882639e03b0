use std::collections::HashSet;

use anyhow::{Result, bail};
use cdav_core::config::Settings;
use cdav_core::util::slug::{SlugResolver, normalize};
use cdav_core::util::token::{TokenGenerator, is_uid};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::Command;

/// ## Summary
/// Runs a parsed command and returns the lines to print.
///
/// ## Errors
/// Returns an error if slug resolution runs out of counters, or if an
/// identifier passed to `check-uid` does not have the generated shape.
pub fn run(command: Command, settings: &Settings) -> Result<Vec<String>> {
    match command {
        Command::Uid {
            prefix,
            suffix,
            count,
            seed,
        } => {
            let prefix = prefix.or_else(|| settings.naming.default_prefix.clone());
            let lines = if let Some(seed) = seed {
                let mut generator = TokenGenerator::with_rng(StdRng::seed_from_u64(seed));
                (0..count)
                    .map(|_| generator.generate(prefix.as_deref(), suffix.as_deref()))
                    .collect()
            } else {
                let mut generator = TokenGenerator::new();
                (0..count)
                    .map(|_| generator.generate(prefix.as_deref(), suffix.as_deref()))
                    .collect()
            };
            Ok(lines)
        }
        Command::ObjectName { kind, count } => {
            let mut generator = TokenGenerator::new();
            Ok((0..count).map(|_| generator.object_name(kind)).collect())
        }
        Command::Slug {
            text,
            taken,
            max_suffix,
        } => {
            let resolver = max_suffix.map_or_else(
                || SlugResolver::from_settings(&settings.naming),
                SlugResolver::new,
            );
            let taken: HashSet<String> = taken.into_iter().collect();
            tracing::debug!(
                taken = taken.len(),
                max_suffix = resolver.max_suffix(),
                "Resolving slug"
            );

            let slug = resolver.resolve(&text, |candidate| !taken.contains(candidate))?;
            Ok(vec![slug])
        }
        Command::Normalize { text } => Ok(vec![normalize(&text)]),
        Command::CheckUid { id } => {
            if !is_uid(&id) {
                bail!("not a generated identifier: {id}");
            }
            Ok(vec![id])
        }
    }
}
