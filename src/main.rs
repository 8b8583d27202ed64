// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Artian-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Artian and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Artian CLI entrypoint.
//!
//! Runs the interactive TUI against the session stored in the state directory, or prints the
//! stored grid with `--print`.

use std::error::Error;
use std::fs;
use std::path::Path;
use std::time::Duration;

use artian::form::FormSession;
use artian::notify::{ToastNotifier, DEFAULT_TOAST_TTL};
use artian::store::{FileStore, StateStore, WriteDurability};

const LOG_FILE_NAME: &str = "artian.log";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<state-dir>] [--durable-writes] [--toast-ms <ms>]\n  {program} [--state-dir <dir>] [--durable-writes] [--toast-ms <ms>]\n  {program} [<state-dir>] --print\n\nIf state-dir/--state-dir is omitted, the current working directory is used.\nThe session is stored as `wilds-artian-tool.json`; logs go to `{LOG_FILE_NAME}` (filter via RUST_LOG).\n\n--durable-writes opts into slower, best-effort durable persistence (fsync/sync where supported).\n--toast-ms sets how long status messages stay visible (default {}).\n--print writes the stored grid to stdout and exits.",
        DEFAULT_TOAST_TTL.as_millis()
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    state_dir: Option<String>,
    durable_writes: bool,
    toast_ms: Option<u64>,
    print: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--state-dir" => {
                if options.state_dir.is_some() {
                    return Err(());
                }
                let dir = args.next().ok_or(())?;
                options.state_dir = Some(dir);
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            "--toast-ms" => {
                if options.toast_ms.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let ms: u64 = raw.parse().map_err(|_| ())?;
                options.toast_ms = Some(ms);
            }
            "--print" => {
                if options.print {
                    return Err(());
                }
                options.print = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.state_dir.is_some() {
                    return Err(());
                }
                options.state_dir = Some(arg);
            }
        }
    }

    if options.print && (options.durable_writes || options.toast_ms.is_some()) {
        return Err(());
    }

    Ok(options)
}

fn init_logging(state_dir: &Path) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(state_dir)?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(state_dir.join(LOG_FILE_NAME))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

fn print_session(store: &StateStore<FileStore>) {
    let session = store.load();
    let status = if session.is_walking() {
        "in progress"
    } else if session.is_complete() {
        "complete"
    } else {
        "not started"
    };
    println!(
        "{} attempts x {} categories, {} parts, {status}",
        session.size().rows(),
        session.size().cols(),
        session.parts_count()
    );
    print!("{}", artian::tui::grid_as_text(&session));
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "artian".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let dir = options.state_dir.unwrap_or_else(|| ".".to_owned());
        let kv = if options.durable_writes {
            FileStore::new(&dir).with_durability(WriteDurability::Durable)
        } else {
            FileStore::new(&dir)
        };
        let store = StateStore::new(kv);

        if options.print {
            print_session(&store);
            return Ok(());
        }

        init_logging(Path::new(&dir))?;
        log::info!("artian starting in {dir:?} ({:?} writes)", store.kv().durability());

        let ttl = options.toast_ms.map(Duration::from_millis).unwrap_or(DEFAULT_TOAST_TTL);
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        runtime.block_on(async move {
            let toast = ToastNotifier::new(tokio::runtime::Handle::current(), ttl);
            let form = FormSession::open(store, toast);

            let tui_join = tokio::task::spawn_blocking(move || {
                artian::tui::run(form).map_err(|err| err.to_string())
            })
            .await;

            let tui_result = tui_join.map_err(|err| -> Box<dyn Error> { Box::new(err) })?;
            tui_result.map_err(|err| Box::new(std::io::Error::other(err)) as Box<dyn Error>)?;
            Ok::<(), Box<dyn Error>>(())
        })?;

        log::info!("artian exiting");
        Ok(())
    })();

    if let Err(err) = result {
        log::error!("{err}");
        eprintln!("artian: {err}");
        std::process::exit(1);
    }
}
