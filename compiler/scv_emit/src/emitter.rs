//! Six-pass C++ header emitter.
//!
//! Passes run strictly in order and stop at the first error:
//!
//! 1. dependency mapping: member types that are not primitives
//! 2. type registration: struct names, rejecting duplicates
//! 3. member validation: member types resolve, member names are not types
//! 4. trait registration: traits, `is` clauses, collected requirements
//! 5. forward declarations in dependency order, with cycle detection
//! 6. definitions in dependency order, with trait code macro-expanded

mod macros;

use rustc_hash::{FxHashMap, FxHashSet};
use scv_ir::{Member, Root, Struct, Trait};
use scv_stack::ensure_sufficient_stack;
use tracing::{debug, instrument};

use crate::types::TypeTable;
use crate::EmitError;

/// Indentation of struct members and trait code.
const INDENT: char = '\t';

pub struct Emitter<'ast> {
    root: &'ast Root,
    timestamp: &'ast str,
    types: TypeTable<'ast>,
    /// Struct name to the members whose types were not primitives in pass 1.
    dependencies: FxHashMap<&'ast str, Vec<&'ast Member>>,
    /// First declaration of each struct name.
    structs: FxHashMap<&'ast str, &'ast Struct>,
    emitted: FxHashSet<&'ast str>,
    /// Structs whose dependencies are being visited, outermost first.
    visiting: Vec<&'ast str>,
    traits: FxHashMap<&'ast str, &'ast Trait>,
    /// Requirement literals in first-seen order.
    requirements: Vec<&'ast str>,
    seen_requirements: FxHashSet<&'ast str>,
    /// Struct bound to `@Type` and the member bound to `@Member`.
    context: macros::Context<'ast>,
    output: String,
}

impl<'ast> Emitter<'ast> {
    /// `timestamp` is written verbatim into the header comment.
    pub fn new(root: &'ast Root, timestamp: &'ast str) -> Self {
        Emitter {
            root,
            timestamp,
            types: TypeTable::with_primitives(),
            dependencies: FxHashMap::default(),
            structs: FxHashMap::default(),
            emitted: FxHashSet::default(),
            visiting: Vec::new(),
            traits: FxHashMap::default(),
            requirements: Vec::new(),
            seen_requirements: FxHashSet::default(),
            context: macros::Context::default(),
            output: String::with_capacity(1024),
        }
    }

    /// Run every pass and return the header text.
    pub fn emit(mut self) -> Result<String, EmitError> {
        self.map_dependencies();
        self.register_types()?;
        self.validate_members()?;
        self.register_traits()?;

        self.write_preamble();
        self.write_forward_declarations()?;
        self.write_definitions()?;

        let trimmed = self.output.trim_end().len();
        self.output.truncate(trimmed);
        self.output.push('\n');
        debug!(bytes = self.output.len(), "emission finished");
        Ok(self.output)
    }

    /// Pass 1.
    #[instrument(skip_all)]
    fn map_dependencies(&mut self) {
        let root = self.root;
        for decl in root.structs() {
            for member in &decl.members {
                if !self.types.contains(&member.ty) {
                    self.dependencies.entry(decl.name.as_str()).or_default().push(member);
                }
            }
        }
        debug!(dependents = self.dependencies.len(), "dependencies mapped");
    }

    /// Pass 2.
    #[instrument(skip_all)]
    fn register_types(&mut self) -> Result<(), EmitError> {
        let root = self.root;
        for decl in root.structs() {
            if !self.types.register_struct(&decl.name) {
                return Err(EmitError::duplicate_type(&decl.name, decl.pos));
            }
            self.structs.insert(&decl.name, decl);
        }
        debug!(structs = self.structs.len(), "types registered");
        Ok(())
    }

    /// Pass 3.
    #[instrument(skip_all)]
    fn validate_members(&self) -> Result<(), EmitError> {
        for decl in self.root.structs() {
            for member in &decl.members {
                if !self.types.contains(&member.ty) {
                    return Err(EmitError::undefined_type(&member.ty, member.pos));
                }
                if self.types.contains(&member.name) {
                    return Err(EmitError::member_named_after_type(&member.name, member.name_pos));
                }
            }
        }
        Ok(())
    }

    /// Pass 4.
    #[instrument(skip_all)]
    fn register_traits(&mut self) -> Result<(), EmitError> {
        let root = self.root;
        for decl in root.traits() {
            if self.traits.insert(&decl.name, decl).is_some() {
                return Err(EmitError::duplicate_trait(&decl.name, decl.pos));
            }
        }

        for decl in root.structs() {
            for trait_ref in &decl.traits {
                let Some(&resolved) = self.traits.get(trait_ref.name.as_str()) else {
                    return Err(EmitError::undefined_trait(&trait_ref.name, trait_ref.pos));
                };
                for requirement in &resolved.requirements {
                    if self.seen_requirements.insert(requirement) {
                        self.requirements.push(requirement);
                    }
                }
            }
        }
        debug!(
            traits = self.traits.len(),
            requirements = self.requirements.len(),
            "traits registered"
        );
        Ok(())
    }

    fn write_preamble(&mut self) {
        self.output.push_str("// File autogenerated by scv on: ");
        self.output.push_str(self.timestamp);
        self.output.push_str("\n\n#pragma once\n\n#include <cstdint>\n#include <string>\n");
        for requirement in &self.requirements {
            self.output.push_str("#include ");
            self.output.push_str(requirement);
            self.output.push('\n');
        }
        self.output.push('\n');
    }

    /// Pass 5.
    #[instrument(skip_all)]
    fn write_forward_declarations(&mut self) -> Result<(), EmitError> {
        let root = self.root;
        for decl in root.structs() {
            self.declare(decl)?;
        }
        self.output.push('\n');
        Ok(())
    }

    /// Declare the structs `decl` depends on, then `decl` itself.
    ///
    /// Recurses once per link of a dependency chain, on a growable stack.
    fn declare(&mut self, decl: &'ast Struct) -> Result<(), EmitError> {
        ensure_sufficient_stack(|| self.declare_inner(decl))
    }

    fn declare_inner(&mut self, decl: &'ast Struct) -> Result<(), EmitError> {
        let name = decl.name.as_str();
        if self.emitted.contains(name) {
            return Ok(());
        }
        self.visiting.push(name);
        for member in self.dependencies.get(name).cloned().unwrap_or_default() {
            if let Some(start) = self.visiting.iter().position(|&open| open == member.ty) {
                let mut chain = self.visiting[start..].to_vec();
                chain.push(&member.ty);
                return Err(EmitError::cyclic_dependency(&member.ty, &chain, member.pos));
            }
            if let Some(&dependency) = self.structs.get(member.ty.as_str()) {
                self.declare(dependency)?;
            }
        }
        self.visiting.pop();

        self.emitted.insert(name);
        self.output.push_str("struct ");
        self.output.push_str(name);
        self.output.push_str(";\n");
        Ok(())
    }

    /// Pass 6.
    #[instrument(skip_all)]
    fn write_definitions(&mut self) -> Result<(), EmitError> {
        self.emitted.clear();
        let root = self.root;
        for decl in root.structs() {
            self.define(decl)?;
        }
        Ok(())
    }

    /// Define the structs `decl` depends on, then `decl` itself. Cycles were
    /// rejected by pass 5.
    fn define(&mut self, decl: &'ast Struct) -> Result<(), EmitError> {
        ensure_sufficient_stack(|| self.define_inner(decl))
    }

    fn define_inner(&mut self, decl: &'ast Struct) -> Result<(), EmitError> {
        let name = decl.name.as_str();
        if !self.emitted.insert(name) {
            return Ok(());
        }
        for member in self.dependencies.get(name).cloned().unwrap_or_default() {
            if let Some(&dependency) = self.structs.get(member.ty.as_str()) {
                self.define(dependency)?;
            }
        }

        self.output.push_str("struct ");
        self.output.push_str(name);
        self.output.push_str(" {\n");
        for member in &decl.members {
            let ty = self.types.canonical(&member.ty).unwrap_or(&member.ty);
            self.output.push(INDENT);
            self.output.push_str(ty);
            self.output.push(' ');
            self.output.push_str(&member.name);
            self.output.push_str(";\n");
        }
        for trait_ref in &decl.traits {
            let Some(&resolved) = self.traits.get(trait_ref.name.as_str()) else {
                return Err(EmitError::undefined_trait(&trait_ref.name, trait_ref.pos));
            };
            for code in &resolved.code {
                self.write_trait_code(decl, code)?;
            }
        }
        self.output.push_str("};\n\n");
        Ok(())
    }
}

/// Emit `root` as a C++ header.
pub fn emit(root: &Root, timestamp: &str) -> Result<String, EmitError> {
    Emitter::new(root, timestamp).emit()
}
