//! Consumers for the voxels produced by a traversal.
//!
//! Anything that implements [`VoxelVisitor`] can be handed to
//! [`traverse`](crate::voxel_traversal::traverse); closures taking an
//! [`XYZPoint`] qualify automatically.

use crate::coordinate_system::cartesian::XYZPoint;
use log::trace;
use std::io::{self, Write};

/// Called once per visited voxel, in traversal order.
pub trait VoxelVisitor {
    fn visit(&mut self, voxel: XYZPoint);
}

impl<F> VoxelVisitor for F
where
    F: FnMut(XYZPoint),
{
    fn visit(&mut self, voxel: XYZPoint) {
        self(voxel)
    }
}

/// Ignores every voxel.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoopVisitor;

impl VoxelVisitor for NoopVisitor {
    fn visit(&mut self, _voxel: XYZPoint) {}
}

/// Appends every voxel to a list.
#[derive(Debug, Default, Clone)]
pub struct CollectingVisitor {
    voxels: Vec<XYZPoint>,
}

impl CollectingVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn voxels(&self) -> &[XYZPoint] {
        &self.voxels
    }

    pub fn into_voxels(self) -> Vec<XYZPoint> {
        self.voxels
    }
}

impl VoxelVisitor for CollectingVisitor {
    fn visit(&mut self, voxel: XYZPoint) {
        self.voxels.push(voxel);
    }
}

/// Emits every voxel at `trace` level.
#[derive(Debug, Default, Copy, Clone)]
pub struct LoggingVisitor;

impl VoxelVisitor for LoggingVisitor {
    fn visit(&mut self, voxel: XYZPoint) {
        trace!("visit {voxel}");
    }
}

/// Writes one `[ x, y, z ]` line per voxel to `writer`.
///
/// `visit` cannot fail, so the first write error is kept and every later
/// voxel is dropped. Call [`WriterVisitor::finish`] to get it back.
pub struct WriterVisitor<W: Write> {
    writer: W,
    written: u64,
    error: Option<io::Error>,
}

impl<W: Write> WriterVisitor<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            written: 0,
            error: None,
        }
    }

    /// Number of lines successfully written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flushes the writer and returns the line count, or the first error hit.
    pub fn finish(mut self) -> io::Result<u64> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.written)
    }
}

impl<W: Write> VoxelVisitor for WriterVisitor<W> {
    fn visit(&mut self, voxel: XYZPoint) {
        if self.error.is_some() {
            return;
        }
        match writeln!(self.writer, "{voxel}") {
            Ok(()) => self.written += 1,
            Err(err) => self.error = Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts `lines` complete lines, then fails every write.
    struct FailAfter {
        lines: usize,
    }

    impl Write for FailAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.lines == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            let newlines = buf.iter().filter(|&&b| b == b'\n').count();
            self.lines = self.lines.saturating_sub(newlines);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_closure_is_a_visitor() {
        let mut seen = Vec::new();
        {
            let mut visitor = |voxel: XYZPoint| seen.push(voxel);
            visitor.visit(XYZPoint::new(1, 2, 3));
            visitor.visit(XYZPoint::new(4, 5, 6));
        }
        assert_eq!(seen, vec![XYZPoint::new(1, 2, 3), XYZPoint::new(4, 5, 6)]);
    }

    #[test]
    fn test_collecting_visitor_keeps_order() {
        let mut visitor = CollectingVisitor::new();
        visitor.visit(XYZPoint::new(0, 0, 1));
        visitor.visit(XYZPoint::new(0, 0, 0));
        assert_eq!(
            visitor.voxels(),
            &[XYZPoint::new(0, 0, 1), XYZPoint::new(0, 0, 0)]
        );
        assert_eq!(visitor.into_voxels().len(), 2);
    }

    #[test]
    fn test_writer_visitor_format() {
        let mut buf = Vec::new();
        let mut visitor = WriterVisitor::new(&mut buf);
        visitor.visit(XYZPoint::new(0, 0, 0));
        visitor.visit(XYZPoint::new(-1, 2, -3));
        assert_eq!(visitor.finish().unwrap(), 2);
        assert_eq!(String::from_utf8(buf).unwrap(), "[ 0, 0, 0 ]\n[ -1, 2, -3 ]\n");
    }

    #[test]
    fn test_writer_visitor_keeps_first_error() {
        let mut visitor = WriterVisitor::new(FailAfter { lines: 1 });
        visitor.visit(XYZPoint::new(1, 1, 1));
        visitor.visit(XYZPoint::new(2, 2, 2));
        visitor.visit(XYZPoint::new(3, 3, 3));
        assert_eq!(visitor.written(), 1);
        let err = visitor.finish().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
