use bytes::{BufMut, Bytes, BytesMut};

use crate::{AttrFlags, AttrType};

pub trait AttrEmitter {
    fn attr_flags(&self) -> AttrFlags;

    fn attr_type(&self) -> AttrType;

    fn len(&self) -> Option<usize>;

    fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    fn emit(&self, buf: &mut BytesMut);

    fn attr_emit(&self, buf: &mut BytesMut) {
        let emit_header = |buf: &mut BytesMut, len: usize| {
            if len > 255 {
                buf.put_u8(self.attr_flags().with_extended(true).into());
                buf.put_u8(self.attr_type().into());
                buf.put_u16(len as u16);
            } else {
                buf.put_u8(self.attr_flags().into());
                buf.put_u8(self.attr_type().into());
                buf.put_u8(len as u8);
            }
        };

        if let Some(len) = self.len() {
            emit_header(buf, len);
            self.emit(buf);
        } else {
            // Buffer the attribute to determine its length.
            let mut attr_buf = BytesMut::new();
            self.emit(&mut attr_buf);
            emit_header(buf, attr_buf.len());
            buf.put(&attr_buf[..]);
        }
    }

    /// Emit the attribute, header included, as a standalone fragment.
    fn to_fragment(&self) -> Bytes {
        let mut buf = BytesMut::new();
        self.attr_emit(&mut buf);
        buf.freeze()
    }
}
