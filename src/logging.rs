// src/logging.rs
//! `log` クレートのログをブラウザのコンソールに流すロガーだよ！📝
//! wasm 以外では標準エラー出力に書く。ロガーを入れなくてもゲームの動きは何も変わらない。

use log::{LevelFilter, Log, Metadata, Record};

// JavaScript の console.log を Rust から呼び出すための準備 (extern ブロック)。
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(s: &str);
}

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}", record.level(), record.args());
        #[cfg(target_arch = "wasm32")]
        console_log(&line);
        #[cfg(not(target_arch = "wasm32"))]
        eprintln!("{}", line);
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// ロガーを一回だけ登録するよ。二回目以降は何もしない。
pub fn init_logging(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
