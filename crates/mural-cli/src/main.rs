// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Mural registry CLI.
//!
//! Developer-facing inspection tool over the node-kind registry: list and
//! search kinds, classify legacy type tags, build provider resource IDs, and
//! audit the registry/alias-table invariants. Table output by default,
//! `--json` for machine consumption.
//!
//! The CLI exits with code `0` on success and non-zero on error.

#![deny(rust_2018_idioms)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]
// The CLI is expected to print to stdout/stderr.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::Table;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use mural_registry::{catalog, parse_defs, KindEntry, LegacyTable, Resolver, ResourceData};
use mural_schema::{Capabilities, NodeKind};

#[derive(Parser, Debug)]
#[command(name = "mural-registry", version, about = "Inspect Mural's node-kind registry")]
struct Cli {
    /// Custom kind definitions (JSON array) merged before the registry freezes
    #[arg(long, global = true, value_name = "FILE")]
    custom: Option<PathBuf>,
    /// Emit JSON instead of tables
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// List registered kinds
    List {
        /// Only kinds under this platform token
        #[arg(long)]
        platform: Option<String>,
        /// Only kinds in this category
        #[arg(long)]
        category: Option<String>,
        /// Only kinds carrying at least one of these tags (repeatable)
        #[arg(long)]
        tag: Vec<String>,
    },
    /// Classify a type tag (legacy string or ty:subtype[:variant])
    Resolve {
        /// The tag to classify
        input: String,
    },
    /// List palette categories with entry counts
    Categories,
    /// Build a provider resource ID from key=value data
    ResourceId {
        /// Kind to address (legacy string or ty:subtype[:variant])
        kind: String,
        /// key=value pairs, e.g. subscriptionId=sub-123
        #[arg(value_parser = parse_key_val)]
        data: Vec<(String, String)>,
    },
    /// Audit the registry and legacy-table invariants
    Validate,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    let resolver = build_resolver(cli.custom.as_deref())?;
    match cli.cmd {
        Cmd::List {
            platform,
            category,
            tag,
        } => list(&resolver, platform.as_deref(), category.as_deref(), &tag, cli.json),
        Cmd::Resolve { input } => resolve(&resolver, &input, cli.json),
        Cmd::Categories => categories(&resolver, cli.json),
        Cmd::ResourceId { kind, data } => resource_id(&resolver, &kind, data),
        Cmd::Validate => validate(&resolver),
    }
}

/// Builtin catalog plus any custom definitions, frozen before first use.
fn build_resolver(custom: Option<&Path>) -> Result<Resolver> {
    let mut builder = catalog::builtin_builder();
    if let Some(path) = custom {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading custom definitions from {}", path.display()))?;
        for def in parse_defs(&json)? {
            builder = builder.register(def.into_entry()?);
        }
    }
    Ok(Resolver::new(builder.build()?, LegacyTable::builtin()))
}

/// Parses one `key=value` argument.
fn parse_key_val(s: &str) -> std::result::Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("`{s}` is not a key=value pair"))
}

/// Turns user input into a kind: composite key when it contains a colon,
/// legacy classification otherwise.
fn parse_kind(resolver: &Resolver, input: &str) -> Result<NodeKind> {
    if input.contains(':') {
        NodeKind::from_composite_key(input)
            .with_context(|| format!("`{input}` is not a valid ty:subtype[:variant] key"))
    } else {
        Ok(resolver.from_legacy(input))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct KindRow {
    kind: String,
    display_name: String,
    category: String,
    capabilities: Capabilities,
    tags: Vec<String>,
}

impl KindRow {
    fn from_entry(entry: &KindEntry) -> Self {
        Self {
            kind: entry.kind.composite_key(),
            display_name: entry.display_name.clone(),
            category: entry.category.clone(),
            capabilities: entry.capabilities,
            tags: entry.tags.clone(),
        }
    }
}

/// Short flag summary, e.g. `metrics,logs,messages(kafka)`.
fn capability_summary(caps: Capabilities) -> String {
    let mut parts = Vec::new();
    if caps.has_metrics {
        parts.push("metrics".to_string());
    }
    if caps.has_logs {
        parts.push("logs".to_string());
    }
    if caps.has_messages {
        match caps.message_protocol {
            Some(p) => parts.push(format!("messages({p})")),
            None => parts.push("messages".to_string()),
        }
    }
    if caps.has_health_check {
        parts.push("health".to_string());
    }
    if caps.has_auto_scaling {
        parts.push("autoscale".to_string());
    }
    if caps.has_network_config {
        parts.push("network".to_string());
    }
    parts.join(",")
}

fn list(
    resolver: &Resolver,
    platform: Option<&str>,
    category: Option<&str>,
    tags: &[String],
    json: bool,
) -> Result<()> {
    let tag_refs: Vec<&str> = tags.iter().map(String::as_str).collect();
    let entries: Vec<&KindEntry> = resolver
        .entries()
        .iter()
        .filter(|e| platform.is_none_or(|p| e.kind.ty == p))
        .filter(|e| category.is_none_or(|c| e.category == c))
        .filter(|e| tag_refs.is_empty() || e.tags.iter().any(|t| tag_refs.contains(&t.as_str())))
        .collect();
    if json {
        let rows: Vec<KindRow> = entries.iter().map(|e| KindRow::from_entry(e)).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    let mut table = Table::new();
    table.set_header(["Kind", "Display name", "Category", "Capabilities", "Tags"]);
    for entry in entries {
        table.add_row([
            entry.kind.composite_key(),
            entry.display_name.clone(),
            entry.category.clone(),
            capability_summary(entry.capabilities),
            entry.tags.join(","),
        ]);
    }
    println!("{table}");
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Resolution {
    input: String,
    kind: NodeKind,
    composite_key: String,
    title: String,
    display_name: String,
    category: String,
    registered: bool,
    legacy: String,
    capabilities: Capabilities,
}

fn resolve(resolver: &Resolver, input: &str, json: bool) -> Result<()> {
    let kind = parse_kind(resolver, input)?;
    let registered = resolver.is_valid(Some(&kind));
    if json {
        let out = Resolution {
            input: input.to_string(),
            composite_key: kind.composite_key(),
            title: kind.title(),
            display_name: resolver.display_name(Some(&kind)),
            category: resolver.category(Some(&kind)),
            registered,
            legacy: resolver.to_legacy(&kind),
            capabilities: resolver.capabilities(Some(&kind)),
            kind,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    println!("kind:         {}", kind.composite_key());
    println!("title:        {}", kind.title());
    println!("display name: {}", resolver.display_name(Some(&kind)));
    println!("category:     {}", resolver.category(Some(&kind)));
    println!("registered:   {registered}");
    println!("legacy tag:   {}", resolver.to_legacy(&kind));
    println!("capabilities: {}", capability_summary(resolver.capabilities(Some(&kind))));
    Ok(())
}

fn categories(resolver: &Resolver, json: bool) -> Result<()> {
    let categories = resolver.categories();
    if json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
        return Ok(());
    }
    let mut table = Table::new();
    table.set_header(["Category", "Kinds"]);
    for category in categories {
        let count = resolver.entries_by_category(&category).len();
        table.add_row([category, count.to_string()]);
    }
    println!("{table}");
    Ok(())
}

fn resource_id(resolver: &Resolver, kind: &str, data: Vec<(String, String)>) -> Result<()> {
    let kind = parse_kind(resolver, kind)?;
    let bag: ResourceData = data.into_iter().collect();
    let id = resolver.build_resource_id(Some(&kind), &bag);
    if id.is_empty() {
        bail!(
            "no resource id for {}: the kind has no mapping or required data fields are missing",
            kind.composite_key()
        );
    }
    println!("{id}");
    Ok(())
}

fn validate(resolver: &Resolver) -> Result<()> {
    resolver.registry().validate()?;
    let table = resolver.legacy_table();
    for key in table.keys() {
        let kind = resolver.from_legacy(key);
        let back = resolver.to_legacy(&kind);
        if resolver.from_legacy(&back) != kind {
            bail!("legacy key `{key}` does not classify stably (via `{back}`)");
        }
        if !resolver.is_valid(Some(&kind)) {
            bail!("legacy key `{key}` maps to unregistered kind {}", kind.composite_key());
        }
    }
    println!(
        "ok: {} kinds, {} legacy keys, round-trip stable",
        resolver.entries().len(),
        table.len()
    );
    Ok(())
}
