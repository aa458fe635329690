use typexpr_types::{Signature, TypeNode, Var};

use super::writer::Writer;
use crate::{RenderError, VariadicFallback};

impl<'r, 'a> Writer<'r, 'a> {
    /// `(a int, b ...string)`. With `variadic`, the last element is written
    /// as its slice element type followed by `...`.
    pub(crate) fn write_tuple(
        &mut self,
        vars: &'a [Var<'a>],
        variadic: bool,
    ) -> Result<(), RenderError> {
        self.buf.push('(');
        for (i, var) in vars.iter().enumerate() {
            if i > 0 {
                self.buf.push_str(", ");
            }
            if !var.name.is_empty() {
                self.buf.push_str(var.name);
                self.buf.push(' ');
            }
            if variadic && i == vars.len() - 1 {
                self.write_variadic(var.ty)?;
            } else {
                self.write_type(var.ty)?;
            }
        }
        self.buf.push(')');
        Ok(())
    }

    fn write_variadic(&mut self, ty: &'a TypeNode<'a>) -> Result<(), RenderError> {
        if let TypeNode::Slice(elem) = ty {
            self.buf.push_str("...");
            return self.write_type(elem);
        }

        // append(s, "foo"...) is typed as func([]byte, string...).
        let accepted = match self.options.variadic_fallback {
            VariadicFallback::StringOnly => ty
                .underlying()
                .and_then(TypeNode::as_basic)
                .is_some_and(|p| p.is_string()),
            VariadicFallback::AnyType => true,
            VariadicFallback::Forbid => false,
        };
        if !accepted {
            panic!(
                "internal error: variadic parameter of kind {} is not a slice",
                ty.kind_name()
            );
        }
        self.write_type(ty)?;
        self.buf.push_str("...");
        Ok(())
    }

    /// Parameters and results, without the `func` keyword.
    pub(crate) fn write_signature(&mut self, sig: &Signature<'a>) -> Result<(), RenderError> {
        self.write_tuple(sig.params, sig.variadic)?;

        match sig.results {
            [] => Ok(()),
            [single] if single.name.is_empty() => {
                self.buf.push(' ');
                self.write_type(single.ty)
            }
            results => {
                self.buf.push(' ');
                self.write_tuple(results, false)
            }
        }
    }
}
