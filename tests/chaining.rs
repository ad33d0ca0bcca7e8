use log_buffer::{BufferWriter, Directive, IntFormat};

const BUFFER_SIZE: usize = 100;

fn entries(logger: &BufferWriter<'_>) -> Vec<Vec<u8>> {
    logger.entries().map(<[u8]>::to_vec).collect()
}

#[test]
fn chained_text() {
    let mut buffer = [0u8; BUFFER_SIZE];
    let mut logger = BufferWriter::new(&mut buffer);

    logger.push("Hello").push(" ").push("World");
    assert_eq!(entries(&logger), [b"Hello".to_vec(), b" ".to_vec(), b"World".to_vec()]);
}

#[test]
fn chained_runs_have_no_gaps() {
    let mut buffer = [0xFFu8; BUFFER_SIZE];
    let mut logger = BufferWriter::new(&mut buffer);

    logger.push("A").push("B").push("C");
    assert_eq!(logger.bytes_written(), 6);
    assert_eq!(logger.written(), b"A\0B\0C\0");
}

#[test]
fn chained_integers_of_mixed_width() {
    let mut buffer = [0u8; BUFFER_SIZE];
    let mut logger = BufferWriter::new(&mut buffer);

    logger.push(42).push(-100).push(999u64);
    assert_eq!(logger.written(), b"42\0-100\0999\0");
}

#[test]
fn chained_mixed_values() {
    let mut buffer = [0u8; BUFFER_SIZE];
    let mut logger = BufferWriter::new(&mut buffer);

    logger.push("Count: ").push(5).push(" Name: ").push("Alice");
    assert_eq!(logger.written(), b"Count: \05\0 Name: \0Alice\0");
}

#[test]
fn chained_binary_between_text() {
    let mut buffer = [0u8; BUFFER_SIZE];
    let mut logger = BufferWriter::new(&mut buffer);

    let first = [0x01u8, 0x02];
    let second = [0x03u8, 0x04];
    logger.push(&first).push("test").push(&second[..]);

    let data = logger.data();
    assert_eq!(&data[..2], &[0x01, 0x02]);
    assert_eq!(&data[2..7], b"test\0");
    assert_eq!(&data[7..9], &[0x03, 0x04]);
    assert_eq!(logger.bytes_written(), 9);
}

#[test]
fn directives_switch_base() {
    let mut buffer = [0u8; BUFFER_SIZE];
    let mut logger = BufferWriter::new(&mut buffer);

    logger
        .push(Directive::Dec)
        .push(10)
        .push(Directive::Hex)
        .push(16)
        .push(Directive::Oct)
        .push(8);
    assert_eq!(logger.written(), b"10\00x10\0010\0");
}

#[test]
fn directives_between_text() {
    let mut buffer = [0u8; BUFFER_SIZE];
    let mut logger = BufferWriter::new(&mut buffer);

    logger.push("Value: ").push(Directive::Hex).push(255).push(" End");
    assert_eq!(logger.written(), b"Value: \00xff\0 End\0");
}

#[test]
fn uppercase_in_either_order() {
    for order in [
        [Directive::Hex, Directive::Uppercase],
        [Directive::Uppercase, Directive::Hex],
    ] {
        let mut buffer = [0u8; BUFFER_SIZE];
        let mut logger = BufferWriter::new(&mut buffer);
        logger.push(order[0]).push(order[1]).push(255);
        assert_eq!(logger.written(), b"0XFF\0");
        assert_eq!(logger.int_format(), IntFormat::HexUpper);
    }
}

#[test]
fn case_directives_leave_decimal_and_octal_alone() {
    let mut buffer = [0u8; BUFFER_SIZE];
    let mut logger = BufferWriter::new(&mut buffer);

    logger.push(Directive::Uppercase).push(255);
    assert_eq!(logger.int_format(), IntFormat::Decimal);
    logger.push(Directive::Oct).push(Directive::Lowercase).push(8);
    assert_eq!(logger.int_format(), IntFormat::Octal);
    assert_eq!(logger.written(), b"255\0010\0");
}

#[test]
fn explicit_format_in_chain() {
    let mut buffer = [0u8; BUFFER_SIZE];
    let mut logger = BufferWriter::new(&mut buffer);

    logger.push(IntFormat::Octal).push(64);
    assert_eq!(logger.written(), b"0100\0");
}

#[test]
fn overflow_mid_chain_is_visible_afterwards() {
    let mut small = [0u8; 6];
    let mut logger = BufferWriter::new(&mut small);

    logger.push("abc").push("defgh").push("x");
    assert!(logger.has_overflowed());
    assert_eq!(logger.written(), b"abc\0x\0");
}
