//! Fill a stack buffer with a few entries, print what landed in it, then
//! reuse the buffer.

use log_buffer::{BufferWriter, Directive};

/// Routes the library's diagnostics to stderr.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

fn init_logging(level: log::LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

fn main() {
    init_logging(log::LevelFilter::Debug);

    let mut buffer = [0u8; 256];
    let mut logger = BufferWriter::new(&mut buffer);

    let _ = logger.append_text("User logged in: ");
    let _ = logger.append_text("john_doe");
    let _ = logger.append_text(" at timestamp: ");
    let _ = logger.append_integer(1_701_436_800);

    let binary_data = [0xDEu8, 0xAD, 0xBE, 0xEF];
    let _ = logger.append_raw(&binary_data);

    println!("Bytes written: {}", logger.bytes_written());
    println!("Remaining capacity: {}", logger.remaining_capacity());
    println!(
        "Has overflowed: {}",
        if logger.has_overflowed() { "yes" } else { "no" }
    );

    // the raw run at the end has no terminator, so stop after the text
    println!("\nBuffer contents (text portion):");
    for (i, entry) in logger.entries().take(4).enumerate() {
        println!("  Entry {}: {}", i, String::from_utf8_lossy(entry));
    }

    logger.reset();
    logger.push("Buffer reused!").push(Directive::Hex).push(48_879);
    let mut entries = logger.entries();
    if let (Some(text), Some(number)) = (entries.next(), entries.next()) {
        println!(
            "\nAfter reset: {} {}",
            String::from_utf8_lossy(text),
            String::from_utf8_lossy(number)
        );
    }

    let mut tiny = [0u8; 4];
    let mut tiny_logger = BufferWriter::new(&mut tiny);
    if let Err(e) = tiny_logger.append_text("does not fit") {
        println!("\nTiny buffer: {e}");
    }
}
