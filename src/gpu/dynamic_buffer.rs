//! Vertex and index buffers that grow when re-uploaded with more data.
//!
//! Most demos upload once; the point cloud replaces its whole buffer every
//! tick with a different size, which is what the growth path is for.

use wgpu::util::DeviceExt;

const MIN_CAPACITY: usize = 64;

/// A GPU buffer that can grow dynamically.
///
/// Uses a 2x growth strategy when capacity is exceeded.
/// Never shrinks (GPU buffers cannot be resized in place).
pub struct DynamicBuffer {
    buffer: wgpu::Buffer,
    capacity: usize,
    len: usize,
    usage: wgpu::BufferUsages,
    label: String,
}

/// New capacity for `needed` bytes, or `None` if `current` already fits.
///
/// At least doubles the request and always grows by at least 1 KiB.
#[must_use]
pub fn grown_capacity(current: usize, needed: usize) -> Option<usize> {
    (needed > current).then(|| (needed * 2).max(current + 1024))
}

impl DynamicBuffer {
    /// Buffer initialized from `bytes`. `COPY_DST` is always added to
    /// `usage`.
    pub fn new_with_bytes(
        device: &wgpu::Device,
        label: &str,
        bytes: &[u8],
        usage: wgpu::BufferUsages,
    ) -> Self {
        // wgpu rejects zero-sized init buffers and wants 4-byte multiples.
        let buffer = if bytes.len() < MIN_CAPACITY || bytes.len() % 4 != 0 {
            let capacity = bytes.len().max(MIN_CAPACITY).next_multiple_of(4);
            let mut padded = bytes.to_vec();
            padded.resize(capacity, 0);
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: &padded,
                usage: usage | wgpu::BufferUsages::COPY_DST,
            })
        } else {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytes,
                usage: usage | wgpu::BufferUsages::COPY_DST,
            })
        };

        Self {
            capacity: buffer.size() as usize,
            buffer,
            len: bytes.len(),
            usage,
            label: label.to_owned(),
        }
    }

    /// Replace the contents with `data`, growing if necessary.
    ///
    /// Returns `true` if the buffer was reallocated.
    pub fn write<T: bytemuck::Pod>(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &[T],
    ) -> bool {
        self.write_bytes(device, queue, bytemuck::cast_slice(data))
    }

    /// Replace the contents with raw bytes, growing if necessary.
    ///
    /// Returns `true` if the buffer was reallocated.
    pub fn write_bytes(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &[u8],
    ) -> bool {
        let needed = data.len().next_multiple_of(4);

        let reallocated = if let Some(new_capacity) = grown_capacity(self.capacity, needed) {
            log::debug!(
                "growing {} from {} to {} bytes",
                self.label,
                self.capacity,
                new_capacity
            );
            self.buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(&self.label),
                size: new_capacity as u64,
                usage: self.usage | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            self.capacity = new_capacity;
            true
        } else {
            false
        };

        if needed == data.len() {
            if needed > 0 {
                queue.write_buffer(&self.buffer, 0, data);
            }
        } else {
            let mut padded = data.to_vec();
            padded.resize(needed, 0);
            queue.write_buffer(&self.buffer, 0, &padded);
        }
        self.len = data.len();

        reallocated
    }

    /// The underlying wgpu buffer.
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Bytes of live data.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no data has been written.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated size in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_without_growing() {
        assert_eq!(grown_capacity(1024, 1024), None);
        assert_eq!(grown_capacity(1024, 0), None);
    }

    #[test]
    fn grows_to_double_the_request() {
        assert_eq!(grown_capacity(1024, 4000), Some(8000));
    }

    #[test]
    fn small_overflow_grows_by_at_least_a_kilobyte() {
        assert_eq!(grown_capacity(64, 100), Some(1088));
    }
}
