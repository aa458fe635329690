use alloc::string::String;
use core::fmt::Write;

use tracing::debug;
use typexpr_types::{ChanDir, Primitive, Scope, TypeNode};

use super::guard::VisitPath;
use super::quote::quote;
use super::qualify::Qualifier;
use crate::{RenderError, RenderOptions};

/// State of one render call: the output buffer and the active path.
pub(crate) struct Writer<'r, 'a> {
    pub(super) buf: String,
    path: VisitPath<'a>,
    scope: &'r Scope<'r>,
    pub(super) options: &'r RenderOptions,
    qualifier: &'r dyn Qualifier,
}

impl<'r, 'a> Writer<'r, 'a> {
    pub(crate) fn new(
        scope: &'r Scope<'r>,
        options: &'r RenderOptions,
        qualifier: &'r dyn Qualifier,
    ) -> Self {
        Self {
            buf: String::new(),
            path: VisitPath::new(),
            scope,
            options,
            qualifier,
        }
    }

    pub(crate) fn finish(self) -> String {
        self.buf
    }

    pub(crate) fn write_type(&mut self, ty: &'a TypeNode<'a>) -> Result<(), RenderError> {
        if self.path.contains(ty) {
            debug!(kind = ty.kind_name(), "cycle in type graph");
            self.buf.push(self.options.cycle_marker);
            self.buf.push_str(ty.kind_name());
            return Ok(());
        }
        if let Some(limit) = self.options.max_depth
            && self.path.depth() >= limit
        {
            return Err(RenderError::DepthExceeded { limit });
        }

        let mark = self.path.enter(ty);
        let result = self.write_kind(ty);
        self.path.leave(mark);
        result
    }

    fn write_kind(&mut self, ty: &'a TypeNode<'a>) -> Result<(), RenderError> {
        match ty {
            TypeNode::Basic(primitive) if primitive.is_invalid() => {
                Err(RenderError::InvalidType)
            }

            TypeNode::Basic(primitive) => {
                if *primitive == Primitive::UnsafePointer {
                    self.buf.push_str("unsafe.");
                }
                self.buf.push_str(primitive.name());
                Ok(())
            }

            TypeNode::Array { len, elem } => {
                let _ = write!(self.buf, "[{}]", len);
                self.write_type(elem)
            }

            TypeNode::Slice(elem) => {
                self.buf.push_str("[]");
                self.write_type(elem)
            }

            TypeNode::Struct(fields) => {
                self.buf.push_str("struct{");
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        self.buf.push_str("; ");
                    }
                    if !field.is_embedded() {
                        self.buf.push_str(field.name);
                        self.buf.push(' ');
                    }
                    self.write_type(field.ty)?;
                    if let Some(tag) = field.tag.filter(|t| !t.is_empty()) {
                        self.buf.push(' ');
                        let _ = quote(&mut self.buf, tag);
                    }
                }
                self.buf.push('}');
                Ok(())
            }

            TypeNode::Pointer(elem) => {
                self.buf.push('*');
                self.write_type(elem)
            }

            TypeNode::Tuple(vars) => self.write_tuple(vars, false),

            TypeNode::Signature(sig) => {
                self.buf.push_str("func");
                self.write_signature(sig)
            }

            // The source-level methods and embedded types are written rather
            // than the full method set: a resolved method set may mention the
            // interface itself through anonymous interfaces in its signatures,
            //
            //     type T interface {
            //         m() interface{ T }
            //     }
            //
            // and would then have no finite spelling.
            TypeNode::Interface(iface) => {
                self.buf.push_str("interface{");
                let methods = iface.methods();
                for (i, method) in methods.iter().enumerate() {
                    if i > 0 {
                        self.buf.push_str("; ");
                    }
                    self.buf.push_str(method.name);
                    self.write_signature(&method.sig)?;
                }
                for (i, embedded) in iface.embeddeds().iter().enumerate() {
                    if i > 0 || !methods.is_empty() {
                        self.buf.push_str("; ");
                    }
                    self.write_type(embedded)?;
                }
                self.buf.push('}');
                Ok(())
            }

            TypeNode::Map { key, elem } => {
                self.buf.push_str("map[");
                self.write_type(key)?;
                self.buf.push(']');
                self.write_type(elem)
            }

            TypeNode::Chan { dir, elem } => {
                let (prefix, parens) = match dir {
                    // chan (<-chan T) needs parentheses; chan <-chan T would
                    // parse as chan<- (chan T).
                    ChanDir::SendRecv => (
                        "chan ",
                        matches!(
                            elem,
                            TypeNode::Chan {
                                dir: ChanDir::RecvOnly,
                                ..
                            }
                        ),
                    ),
                    ChanDir::SendOnly => ("chan<- ", false),
                    ChanDir::RecvOnly => ("<-chan ", false),
                };
                self.buf.push_str(prefix);
                if parens {
                    self.buf.push('(');
                }
                self.write_type(elem)?;
                if parens {
                    self.buf.push(')');
                }
                Ok(())
            }

            TypeNode::Named(named) => {
                match named.scope() {
                    Some(owner) if self.qualifier.must_qualify(self.scope, owner) => {
                        self.buf.push_str(owner.name());
                        self.buf.push('.');
                    }
                    _ => {}
                }
                self.buf.push_str(named.name());
                Ok(())
            }

            TypeNode::Opaque(opaque) => {
                let mut text = String::new();
                if write!(text, "{}", opaque).is_err() {
                    panic!(
                        "internal error: opaque type {} failed to format",
                        opaque.kind_name()
                    );
                }
                self.buf.push_str(&text);
                Ok(())
            }
        }
    }
}
