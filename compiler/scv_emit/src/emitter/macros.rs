//! Macro expansion inside trait code.
//!
//! Code is evaluated in one of two modes. In [`Mode::Output`] text goes
//! straight into the header; in [`Mode::Collect`] it is returned to the
//! caller, which is how `@ForMemberIn` builds its argument and its
//! per-member bodies.
//!
//! | macro | expands to |
//! |---|---|
//! | `@Type` | name of the struct the code is being expanded for |
//! | `@Member` | `<type> <name> ` of the member bound by `@ForMemberIn` |
//! | `@ForMemberIn(S) code { ... }` | the body once per member of struct `S` |

use std::mem;

use scv_ir::{Code, CodeItem, Macro, Struct};
use scv_stack::ensure_sufficient_stack;
use tracing::trace;

use super::{Emitter, INDENT};
use crate::EmitError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum Mode {
    Output,
    Collect,
}

/// Bindings visible to macros.
#[derive(Copy, Clone, Default)]
pub(super) struct Context<'ast> {
    active: Option<&'ast Struct>,
    /// Index into `active`'s members, set inside `@ForMemberIn` bodies.
    member: Option<usize>,
}

impl<'ast> Emitter<'ast> {
    /// Write one trait code block into the definition of `decl`.
    pub(super) fn write_trait_code(&mut self, decl: &'ast Struct, code: &'ast Code) -> Result<(), EmitError> {
        let saved = mem::replace(
            &mut self.context,
            Context {
                active: Some(decl),
                member: None,
            },
        );
        let mark = self.output.len();
        self.output.push(INDENT);
        let result = self.eval_code(code, Mode::Output);
        self.context = saved;
        result?;

        if self.output.len() == mark + INDENT.len_utf8() {
            self.output.truncate(mark);
        } else if !self.output.ends_with('\n') {
            self.output.push('\n');
        }
        Ok(())
    }

    fn eval_code(&mut self, code: &'ast Code, mode: Mode) -> Result<String, EmitError> {
        let mut collected = String::new();
        for item in &code.items {
            match item {
                CodeItem::Segment(segment) => match mode {
                    Mode::Output => self.output.push_str(segment.text()),
                    Mode::Collect => collected.push_str(segment.text()),
                },
                CodeItem::Macro(invocation) => {
                    // Macro bodies nest as deep as the source does.
                    let text = ensure_sufficient_stack(|| self.eval_macro(invocation, mode))?;
                    collected.push_str(&text);
                }
            }
        }
        Ok(collected)
    }

    /// Expand `invocation`. In output mode the expansion is written and the
    /// returned string is empty.
    fn eval_macro(&mut self, invocation: &'ast Macro, mode: Mode) -> Result<String, EmitError> {
        trace!(name = %invocation.name, ?mode, "expanding macro");
        let text = match invocation.name.as_str() {
            "Type" => self.expand_type(invocation)?,
            "Member" => self.expand_member(invocation)?,
            "ForMemberIn" => self.expand_for_member_in(invocation)?,
            _ => return Err(EmitError::unrecognized_macro(&invocation.name, invocation.pos)),
        };
        match mode {
            Mode::Output => {
                self.output.push_str(&text);
                Ok(String::new())
            }
            Mode::Collect => Ok(text),
        }
    }

    fn expand_type(&self, invocation: &'ast Macro) -> Result<String, EmitError> {
        expect_bare(invocation)?;
        match self.context.active {
            Some(active) => Ok(active.name.clone()),
            None => Err(EmitError::macro_out_of_context(
                "Type",
                "inside trait code",
                invocation.pos,
            )),
        }
    }

    fn expand_member(&self, invocation: &'ast Macro) -> Result<String, EmitError> {
        expect_bare(invocation)?;
        let member = self
            .context
            .active
            .zip(self.context.member)
            .and_then(|(active, index)| active.members.get(index));
        let Some(member) = member else {
            return Err(EmitError::macro_out_of_context(
                "Member",
                "inside the body of @ForMemberIn",
                invocation.pos,
            ));
        };
        let ty = self.types.canonical(&member.ty).unwrap_or(&member.ty);
        Ok(format!("{ty} {} ", member.name))
    }

    fn expand_for_member_in(&mut self, invocation: &'ast Macro) -> Result<String, EmitError> {
        let ([target], Some(body)) = (invocation.args.as_slice(), &invocation.body) else {
            return Err(EmitError::macro_shape(
                "ForMemberIn",
                "exactly one argument and a code block",
                invocation.pos,
            ));
        };

        let name = self.eval_macro(target, Mode::Collect)?;
        let Some(&subject) = self.structs.get(name.as_str()) else {
            return Err(EmitError::undefined_struct_argument(&name, target.pos));
        };

        let saved = self.context;
        let result = self.expand_members(subject, body);
        self.context = saved;
        result
    }

    fn expand_members(&mut self, subject: &'ast Struct, body: &'ast Code) -> Result<String, EmitError> {
        let mut expanded = String::new();
        for index in 0..subject.members.len() {
            self.context = Context {
                active: Some(subject),
                member: Some(index),
            };
            expanded.push_str(&self.eval_code(body, Mode::Collect)?);
        }
        Ok(expanded)
    }
}

/// `@Type` and `@Member` take neither arguments nor a code block.
fn expect_bare(invocation: &Macro) -> Result<(), EmitError> {
    if invocation.args.is_empty() && invocation.body.is_none() {
        Ok(())
    } else {
        Err(EmitError::macro_shape(
            &invocation.name,
            "no arguments and no code block",
            invocation.pos,
        ))
    }
}
