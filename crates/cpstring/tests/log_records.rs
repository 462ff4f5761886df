//! Records emitted through the `log` facade while building offset tables.

use std::sync::Mutex;

use cpstring::{CodePointString, DecodeOptions, InvalidUtf8Mode};
use log::{LevelFilter, Log, Metadata, Record};

struct Capture {
    records: Mutex<Vec<String>>,
}

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.target().starts_with("cpstring")
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            self.records
                .lock()
                .unwrap()
                .push(format!("{} {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    records: Mutex::new(Vec::new()),
};

// The logger is process global, so everything runs in one test.
#[test]
fn construction_is_logged() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let s = CodePointString::new(b"a\xFFb");
    assert_eq!(s.len(), 3);

    let options = DecodeOptions {
        invalid_utf8: InvalidUtf8Mode::ReplaceMaximalSubpart,
    };
    let s = CodePointString::with_options(b"a\xE2\x82b", options).unwrap();
    assert_eq!(s.len(), 3);

    let records = CAPTURE.records.lock().unwrap().clone();
    assert_eq!(
        records,
        [
            "DEBUG invalid UTF-8 sequence of 1 byte(s) at byte 1",
            "TRACE indexed 3 code points over 3 bytes",
            "DEBUG invalid UTF-8 sequence of 2 byte(s) at byte 1",
            "TRACE indexed 3 code points over 4 bytes",
        ]
    );
}
