//! tracingの出力をブラウザのコンソールへ流す

use std::io::{self, Write};
use tracing_subscriber::fmt::MakeWriter;

/// 1イベント分を溜めて、破棄時にまとめて`console.log`する
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if !line.is_empty() {
            web_sys::console::log_1(&line.into());
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { buf: Vec::new() }
    }
}

/// wasmでは時刻が取れないため時刻なしで出力する
pub fn init() {
    let result = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(tracing::Level::DEBUG)
        .without_time()
        .with_target(false)
        .try_init();

    if result.is_err() {
        web_sys::console::warn_1(&"tracing subscriber already installed".into());
    }
}
