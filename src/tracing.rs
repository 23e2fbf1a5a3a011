use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, OnceLock, RwLock};

/// Log sink shared by every writer the subscriber creates; the optional file
/// can be swapped after initialization.
#[derive(Clone)]
struct SharedWriter {
    inner: Arc<RwLock<Option<std::fs::File>>>,
}

struct TeeWriter {
    inner: Arc<RwLock<Option<std::fs::File>>>,
}

impl SharedWriter {
    fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
        }
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SharedWriter {
    type Writer = TeeWriter;

    fn make_writer(&'a self) -> Self::Writer {
        TeeWriter {
            inner: self.inner.clone(),
        }
    }
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = io::stderr().write(buf)?;
        if let Ok(mut guard) = self.inner.write() {
            if let Some(file) = guard.as_mut() {
                let _ = file.write_all(&buf[..written]);
            }
        }
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        if let Ok(mut guard) = self.inner.write() {
            if let Some(file) = guard.as_mut() {
                let _ = file.flush();
            }
        }
        Ok(())
    }
}

static WRITER: OnceLock<SharedWriter> = OnceLock::new();

/// Install the global subscriber (`RUST_LOG`, default `info`) and bridge
/// `log` records into it. Safe to call more than once.
pub fn init(log_file: Option<&Path>) {
    let _ = tracing_log::LogTracer::init();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let writer = WRITER.get_or_init(SharedWriter::new).clone();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .try_init();

    set_log_file(log_file);
}

pub fn set_log_file(log_file: Option<&Path>) {
    let Some(writer) = WRITER.get() else {
        return;
    };
    let Ok(mut guard) = writer.inner.write() else {
        return;
    };
    if let Some(path) = log_file {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(file) = OpenOptions::new().create(true).append(true).open(path) {
            *guard = Some(file);
        }
    } else {
        *guard = None;
    }
}
