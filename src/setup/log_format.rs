use std::io;

use slog::{Drain, OwnedKVList, Record, KV};
use slog_term::{Decorator, RecordDecorator, Serializer};

pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.3f %:z";

/// RackFormat formats a log record in one line:
/// `[<timestamp>] [<LEVEL>] [<file>:<line>] <msg> <key>: <value>, ...`
pub struct RackFormat<D>
where
    D: Decorator,
{
    decorator: D,
}

impl<D> RackFormat<D>
where
    D: Decorator,
{
    pub fn new(decorator: D) -> RackFormat<D> {
        RackFormat { decorator }
    }
}

impl<D> Drain for RackFormat<D>
where
    D: Decorator,
{
    type Ok = ();
    type Err = io::Error;

    fn log(&self, record: &Record, values: &OwnedKVList) -> io::Result<()> {
        self.decorator.with_record(record, values, |rd| {
            write_header(rd, record)?;

            rd.start_whitespace()?;
            write!(rd, " ")?;
            rd.start_msg()?;
            write!(rd, "{}", record.msg())?;

            write_fields(rd, record, values)?;

            rd.start_whitespace()?;
            writeln!(rd)?;
            rd.flush()
        })
    }
}

fn write_header(rd: &mut dyn RecordDecorator, record: &Record) -> io::Result<()> {
    rd.start_timestamp()?;
    write!(rd, "[{}]", chrono::Local::now().format(TIMESTAMP_FORMAT))?;

    rd.start_whitespace()?;
    write!(rd, " ")?;
    rd.start_level()?;
    write!(rd, "[{}]", record.level().as_short_str())?;

    rd.start_whitespace()?;
    write!(rd, " ")?;
    // no start_file() in RecordDecorator
    rd.start_msg()?;
    write!(rd, "[{}:{}]", record.file(), record.line())
}

fn write_fields(rd: &mut dyn RecordDecorator, record: &Record, values: &OwnedKVList) -> io::Result<()> {
    // no leading comma; kvs are separated with ", "
    let mut serializer = Serializer::new(rd, false, true);

    record.kv().serialize(record, &mut serializer)?;
    values.serialize(record, &mut serializer)?;

    serializer.finish()
}
