//! Read-only snapshot of a library's public type system.
//!
//! The graph is produced by an external loader and arrives fully resolved: every named
//! reference points at a type in this assembly, in one of its declared dependencies, or at an
//! opaque external FQN. Nothing in this module validates the graph.

/// Type references and formatter-facing identities.
pub mod reference;
/// Type, member and documentation nodes.
pub mod types;

use serde::Deserialize;

pub use self::reference::{Primitive, TypeIdentity, TypeRef};
pub use self::types::{
	ClassType, Docs, EnumMember, EnumType, Initializer, InterfaceType, Method, Parameter,
	Property, TypeKind, TypeNode,
};
use crate::error::{RenderError, Result};

/// Package coordinates of an assembly in each target ecosystem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Targets {
	/// Importable Python module, e.g. `acme_storage`.
	pub python: Option<String>,
	/// Java package prefix, e.g. `com.acme.storage`.
	pub java: Option<String>,
	/// .NET namespace, e.g. `Acme.Storage`.
	pub dotnet: Option<String>,
}

/// A named partition of an assembly's types.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Submodule {
	/// Dotted path of the sub-module relative to the assembly.
	pub name: String,
	/// Readme text for the sub-module.
	#[serde(default)]
	pub readme: Option<String>,
}

/// Types of another assembly the graph references.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dependency {
	/// Assembly name.
	pub name: String,
	/// Package coordinates of the dependency.
	#[serde(default)]
	pub targets: Targets,
	/// Types the loader resolved from the dependency.
	#[serde(default)]
	pub types: Vec<TypeNode>,
}

/// The whole graph handed to a render.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeSystem {
	/// Assembly (package) name.
	pub name: String,
	/// Assembly version.
	#[serde(default)]
	pub version: Option<String>,
	/// Package readme.
	#[serde(default)]
	pub readme: Option<String>,
	/// Package coordinates of this assembly.
	#[serde(default)]
	pub targets: Targets,
	/// Declared sub-modules.
	#[serde(default)]
	pub submodules: Vec<Submodule>,
	/// Types declared by this assembly.
	#[serde(default)]
	pub types: Vec<TypeNode>,
	/// Resolved dependency assemblies.
	#[serde(default)]
	pub dependencies: Vec<Dependency>,
}

impl TypeSystem {
	/// Decode a graph from its JSON wire form.
	pub fn from_json(json: &str) -> Result<Self> {
		serde_json::from_str(json).map_err(RenderError::Graph)
	}

	/// Look up a type by FQN in this assembly, then in its dependencies.
	pub fn find_type(&self, fqn: &str) -> Option<&TypeNode> {
		self.types.iter().find(|ty| ty.fqn == fqn).or_else(|| {
			self.dependencies
				.iter()
				.flat_map(|dep| dep.types.iter())
				.find(|ty| ty.fqn == fqn)
		})
	}

	/// Whether `fqn` is declared by this assembly itself.
	pub fn is_local(&self, fqn: &str) -> bool {
		self.types.iter().any(|ty| ty.fqn == fqn)
	}

	/// Resolve the formatter-facing identity of `fqn`.
	pub fn identity(&self, fqn: &str) -> TypeIdentity {
		if let Some(ty) = self.types.iter().find(|ty| ty.fqn == fqn) {
			return TypeIdentity {
				fqn: ty.fqn.clone(),
				name: ty.name.clone(),
				assembly: self.name.clone(),
				namespace: ty.namespace.clone(),
				targets: self.targets.clone(),
			};
		}

		for dep in &self.dependencies {
			if let Some(ty) = dep.types.iter().find(|ty| ty.fqn == fqn) {
				return TypeIdentity {
					fqn: ty.fqn.clone(),
					name: ty.name.clone(),
					assembly: dep.name.clone(),
					namespace: ty.namespace.clone(),
					targets: dep.targets.clone(),
				};
			}
		}

		let mut identity = TypeIdentity::from_fqn(fqn);
		if let Some(dep) = self.dependencies.iter().find(|dep| dep.name == identity.assembly) {
			identity.targets = dep.targets.clone();
		}
		identity
	}

	/// Types belonging to one sub-module, or to the assembly root when `submodule` is `None`.
	pub fn module_types(&self, submodule: Option<&str>) -> Result<Vec<&TypeNode>> {
		if let Some(name) = submodule {
			let declared = self.submodules.iter().any(|sub| sub.name == name)
				|| self.types.iter().any(|ty| ty.namespace.as_deref() == Some(name));
			if !declared {
				return Err(RenderError::UnknownSubmodule {
					assembly: self.name.clone(),
					submodule: name.to_string(),
				});
			}
		}

		Ok(self
			.types
			.iter()
			.filter(|ty| ty.namespace.as_deref() == submodule)
			.collect())
	}

	/// Readme for the root module or a sub-module.
	pub fn readme_for(&self, submodule: Option<&str>) -> Option<&str> {
		match submodule {
			None => self.readme.as_deref(),
			Some(name) => self
				.submodules
				.iter()
				.find(|sub| sub.name == name)
				.and_then(|sub| sub.readme.as_deref()),
		}
	}

	/// Local types that list `fqn` among their implemented or extended interfaces.
	pub fn implementations_of(&self, fqn: &str) -> Vec<&TypeNode> {
		self.types
			.iter()
			.filter(|ty| ty.interfaces().iter().any(|iface| iface == fqn))
			.collect()
	}
}
