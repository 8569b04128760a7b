use bobtiler_core::paths;
use colored::*;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

pub struct BobTilerLogger {
    max_level: Level,
    log_file: Mutex<Option<File>>,
    target_colors: Mutex<HashMap<String, usize>>,
    next_color_index: AtomicUsize,
}

impl BobTilerLogger {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        let log_file = paths::log_file_path().and_then(|path| {
            OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&path)
                .map_err(|e| eprintln!("Warning: Failed to open log file at {:?}: {}", path, e))
                .ok()
        });

        Self {
            max_level: level_for(quiet, verbose),
            log_file: Mutex::new(log_file),
            target_colors: Mutex::new(HashMap::new()),
            next_color_index: AtomicUsize::new(0),
        }
    }

    fn color_for_target(&self, target: &str) -> String {
        let colors: &[fn(&str) -> ColoredString] = &[
            |s| s.green(),
            |s| s.yellow(),
            |s| s.blue(),
            |s| s.magenta(),
            |s| s.cyan(),
            |s| s.purple(),
        ];

        let color_index = match self.target_colors.lock() {
            Ok(mut target_colors) => *target_colors.entry(target.to_string()).or_insert_with(|| {
                self.next_color_index.fetch_add(1, Ordering::SeqCst) % colors.len()
            }),
            Err(_) => 0,
        };

        colors[color_index](target).to_string()
    }

    fn format_log(&self, record: &Record) -> String {
        let level_str = level_tag(record.level());
        let target = match short_target(record) {
            Some(target) => format!("[{}] ", self.color_for_target(target).dimmed()),
            None => String::new(),
        };
        let message = format!("{} {}{}", level_str, target, record.args());

        match record.level() {
            Level::Error => message.red().bold().to_string(),
            Level::Warn => message.yellow().bold().to_string(),
            level => {
                let colored_level = match level {
                    Level::Info => level_str.green().bold(),
                    Level::Debug => level_str.blue().bold(),
                    _ => level_str.white().bold(),
                };
                message.replacen(level_str, &colored_level.to_string(), 1)
            }
        }
    }

    fn format_log_plain(&self, record: &Record) -> String {
        let target = match short_target(record) {
            Some(target) => format!("[{}] ", target),
            None => String::new(),
        };
        format!("{} {}{}", level_tag(record.level()), target, record.args())
    }
}

fn level_for(quiet: bool, verbose: bool) -> Level {
    if quiet {
        Level::Info
    } else if verbose {
        Level::Trace
    } else {
        Level::Debug
    }
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "[E]",
        Level::Warn => "[W]",
        Level::Info => "[I]",
        Level::Debug => "[D]",
        Level::Trace => "[T]",
    }
}

/// Last path segment of the record's target, e.g. `layout_tree` for
/// `bobtiler_core::layouts::layout_tree::layout_tree`.
fn short_target<'a>(record: &Record<'a>) -> Option<&'a str> {
    let target = record.target();
    if target.is_empty() {
        return None;
    }
    target.rsplit("::").next()
}

impl Log for BobTilerLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // Logs go to stderr so the dumped tree on stdout stays parseable
        eprintln!("{}", self.format_log(record));

        if let Ok(mut file_opt) = self.log_file.lock() {
            if let Some(file) = file_opt.as_mut() {
                let _ = writeln!(file, "{}", self.format_log_plain(record));
                let _ = file.flush();
            }
        }
    }

    fn flush(&self) {}
}

pub fn init_logger(quiet: bool, verbose: bool) -> Result<(), log::SetLoggerError> {
    let logger = BobTilerLogger::new(quiet, verbose);
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}
