//! Echo Bot Demo
//!
//! A console-transport demonstration of the Parley framework. Lines typed on
//! stdin become inbound events; replies are printed back to the terminal.
//!
//! Address the bot directly by prefixing a line with `@parley ` to exercise
//! `RespondTo` commands; anything else is dispatched as a plain channel post.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package echo-bot
//! ```
//!
//! Then try:
//!
//! ```text
//! 3 + 4
//! @parley greet world
//! @parley roll d20 for luck
//! @parley status
//! ```

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use parley::core::{Attachment, ChatTransport, IncomingMessage, TransportResult};
use parley::prelude::*;
use parley::runtime::logging;

// ============================================================================
// Console Transport
// ============================================================================

/// A transport that "delivers" messages by printing them to the terminal.
struct ConsoleTransport;

#[async_trait]
impl ChatTransport for ConsoleTransport {
    fn self_id(&self) -> &str {
        "parley"
    }

    async fn send_text(&self, channel_id: &str, text: &str) -> TransportResult<()> {
        println!("[{channel_id}] parley: {text}");
        Ok(())
    }

    async fn send_attachment(
        &self,
        channel_id: &str,
        attachment: &Attachment,
    ) -> TransportResult<()> {
        if let Some(title) = &attachment.title {
            println!("[{channel_id}] parley: == {title} ==");
        }
        match &attachment.text {
            Some(text) => println!("[{channel_id}] parley: {text}"),
            None => println!("[{channel_id}] parley: {}", attachment.fallback),
        }
        for field in &attachment.fields {
            println!("[{channel_id}] parley:   {}: {}", field.title, field.value);
        }
        Ok(())
    }
}

// ============================================================================
// Commands
// ============================================================================

#[derive(Default)]
struct Greeter;

impl Greeter {
    fn greet(&self, name: String) -> String {
        format!("hello, {name}!")
    }
}

define_command! {
    static GREET: Greeter => greet,
    trigger: RespondTo,
    pattern: r"^greet (\w+)$",
    params: [required(1, Str)],
}

#[derive(Default)]
struct Calculator;

impl Calculator {
    fn add(&self, a: i64, b: i64) -> String {
        format!("{a} + {b} = {}", a + b)
    }
}

define_command! {
    static ADD: Calculator => add,
    trigger: Listen,
    pattern: r"(-?\d+) \+ (-?\d+)",
    params: [required(1, Long), required(2, Long)],
}

#[derive(Default)]
struct DiceRoller;

impl DiceRoller {
    fn roll(&self, sides: i32, reason: Option<String>) -> String {
        // Not actually random; the point is the optional capture.
        let result = sides / 2 + 1;
        match reason {
            Some(reason) => format!("rolled {result} on a d{sides} for {reason}"),
            None => format!("rolled {result} on a d{sides}"),
        }
    }
}

define_command! {
    static ROLL: DiceRoller => roll,
    trigger: RespondTo,
    pattern: r"^roll d(\d+)(?: for (\w+))?$",
    params: [required(1, Int), optional(2, Str)],
}

#[derive(Default)]
struct StatusReport;

impl StatusReport {
    fn status(&self) -> Attachment {
        Attachment::new("parley demo: all systems nominal")
            .title("Status")
            .color("#36a64f")
            .field("transport", "console", true)
            .field("uptime", "forever", true)
    }
}

define_command! {
    static STATUS: StatusReport => status,
    trigger: RespondTo,
    pattern: r"^status$",
    params: [],
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config()?;
    logging::init_from_config(&config.logging);

    let transport = Arc::new(ConsoleTransport);
    let (runtime, sink) = BotRuntime::new(transport, &config);

    info!("type messages below; prefix with `@parley ` to address the bot");

    // Feed stdin lines into the runtime as inbound events.
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let delivered = match line.strip_prefix("@parley ") {
                Some(rest) => {
                    sink.mention_or_direct(IncomingMessage::new(rest, "console", "you"))
                        .await
                }
                None => sink.plain(IncomingMessage::new(line, "console", "you")).await,
            };
            if !delivered {
                break;
            }
        }
    });

    runtime.run().await?;
    Ok(())
}
