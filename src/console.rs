use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Построчный вывод, общий для всех рабочих задач.
///
/// Каждая строка пишется и сбрасывается целиком под блокировкой,
/// поэтому строки разных задач не перемешиваются.
#[derive(Clone)]
pub struct Console {
    sink: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Console {
    pub fn new(sink: impl Write + Send + 'static) -> Self {
        Console {
            sink: Arc::new(Mutex::new(Box::new(sink))),
        }
    }

    pub fn stdout() -> Self {
        Console::new(io::stdout())
    }

    pub fn line(&self, line: &str) -> io::Result<()> {
        let mut sink = self.sink.lock();
        writeln!(sink, "{}", line)?;
        sink.flush()
    }
}

/// Буфер в памяти, который можно разделить между [`Console`] и читателем.
///
/// Нужен для тестов и встраивания: драйвер пишет в буфер, а вызывающий код
/// потом разбирает напечатанные строки через [`SharedBuffer::lines`].
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
