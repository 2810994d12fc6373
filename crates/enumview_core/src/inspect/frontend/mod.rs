use crate::inspect::{
	CaseLabel, CaseLabelPolicy, EnumResolution, PresentationOptions, Result, Target, ValueTree, current_enum_value, materialize_payload, render_diagnostic,
	render_summary,
};

/// Observable state of an [`EnumFrontEnd`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationState {
	/// `refresh` has not run yet.
	Uninitialized,
	/// The last refresh failed.
	Invalid,
	/// Optional in its empty case; no children, summary only.
	EmptyOptional,
	/// Payload-less case shown as a label.
	LabelOnly,
	/// Payload shown in place of the union.
	PayloadOnly,
}

/// One child handed out by an [`EnumFrontEnd`].
#[derive(Debug, Clone, PartialEq)]
pub enum Child<'a, V> {
	/// The label of a payload-less case.
	Case(&'a CaseLabel),
	/// A child of the payload value.
	Value(V),
}

/// Node representing the current refresh, read without going through child indices.
#[derive(Debug, Clone, PartialEq)]
pub enum CurrentNode<'a, V> {
	/// Label of the selected payload-less case.
	Case(&'a CaseLabel),
	/// Materialized payload.
	Payload(&'a V),
}

#[derive(Debug)]
enum Presentation<V> {
	Uninitialized,
	Invalid,
	EmptyOptional,
	Label(CaseLabel),
	Payload(V),
}

/// Synthetic-children provider for one tagged-union value.
///
/// The host is passed to every query that consults it, so a front end can be
/// stored next to the value it presents. Every [`refresh`](Self::refresh)
/// recomputes the resolution and the current node from scratch; reads between
/// refreshes see only the last result.
#[derive(Debug)]
pub struct EnumFrontEnd<V, T> {
	backend: V,
	options: PresentationOptions,
	resolution: Option<EnumResolution<T>>,
	current: Presentation<V>,
	diagnostic: Option<String>,
}

impl<V, T> EnumFrontEnd<V, T> {
	/// Create an unrefreshed front end for `backend`.
	pub fn new(backend: V, options: PresentationOptions) -> Self {
		Self {
			backend,
			options,
			resolution: None,
			current: Presentation::Uninitialized,
			diagnostic: None,
		}
	}

	/// Recompute the selected case and current node; `true` when resolution succeeded.
	pub fn refresh<H>(&mut self, target: &H) -> bool
	where
		H: Target<Value = V, Type = T> + ?Sized,
	{
		self.resolution = None;
		self.current = Presentation::Invalid;
		self.diagnostic = None;

		match self.update(target) {
			Ok(()) => {
				log::debug!("enum refresh -> {:?}", self.state());
				true
			}
			Err(err) => {
				log::debug!("enum refresh -> Invalid: {err}");
				self.current = Presentation::Invalid;
				self.diagnostic = Some(err.to_string());
				false
			}
		}
	}

	fn update<H>(&mut self, target: &H) -> Result<()>
	where
		H: Target<Value = V, Type = T> + ?Sized,
	{
		let resolution = current_enum_value(target, &self.backend)?;
		let current = self.present(target, &resolution);
		// Keep the resolution even when the payload fails, so the summary can still name the case.
		self.resolution = Some(resolution);
		self.current = current?;
		Ok(())
	}

	fn present<H>(&self, target: &H, resolution: &EnumResolution<T>) -> Result<Presentation<V>>
	where
		H: Target<Value = V, Type = T> + ?Sized,
	{
		if resolution.is_empty_optional() {
			return Ok(Presentation::EmptyOptional);
		}
		let Some(region) = &resolution.payload else {
			return Ok(Presentation::Label(CaseLabel::new(&resolution.case_name)));
		};

		let bytes = target.backing_bytes(&self.backend)?;
		let payload = materialize_payload(target, &bytes, &resolution.case_name, region)?;

		if resolution.is_optional && self.options.collapse_nested_cases {
			if let Some(label) = nested_case(target, &payload) {
				return Ok(Presentation::Label(label));
			}
		}

		Ok(Presentation::Payload(payload))
	}

	/// Current state.
	pub fn state(&self) -> PresentationState {
		match self.current {
			Presentation::Uninitialized => PresentationState::Uninitialized,
			Presentation::Invalid => PresentationState::Invalid,
			Presentation::EmptyOptional => PresentationState::EmptyOptional,
			Presentation::Label(_) => PresentationState::LabelOnly,
			Presentation::Payload(_) => PresentationState::PayloadOnly,
		}
	}

	/// Whether the last refresh produced a usable presentation.
	pub fn is_valid(&self) -> bool {
		matches!(
			self.current,
			Presentation::EmptyOptional | Presentation::Label(_) | Presentation::Payload(_)
		)
	}

	/// Resolution from the last refresh, kept even when payload extraction failed.
	pub fn resolution(&self) -> Option<&EnumResolution<T>> {
		self.resolution.as_ref()
	}

	/// Error text from the last failed refresh.
	pub fn diagnostic(&self) -> Option<&str> {
		self.diagnostic.as_deref()
	}

	/// Value this front end presents.
	pub fn backend(&self) -> &V {
		&self.backend
	}

	/// Options the front end presents with.
	pub fn options(&self) -> &PresentationOptions {
		&self.options
	}

	/// The label or payload standing for this refresh, outside the child index space.
	pub fn current_node(&self) -> Option<CurrentNode<'_, V>> {
		match &self.current {
			Presentation::Label(label) => Some(CurrentNode::Case(label)),
			Presentation::Payload(payload) => Some(CurrentNode::Payload(payload)),
			Presentation::Uninitialized | Presentation::Invalid | Presentation::EmptyOptional => None,
		}
	}

	/// Number of synthetic children.
	pub fn num_children<H>(&self, target: &H) -> usize
	where
		H: ValueTree<Value = V> + ?Sized,
	{
		match &self.current {
			Presentation::Uninitialized | Presentation::Invalid | Presentation::EmptyOptional => 0,
			Presentation::Label(_) => match self.options.case_labels {
				CaseLabelPolicy::Child => 1,
				CaseLabelPolicy::SummaryOnly => 0,
			},
			Presentation::Payload(payload) => target.num_children(payload),
		}
	}

	/// Synthetic child at `idx`.
	pub fn child_at<H>(&self, target: &H, idx: usize) -> Option<Child<'_, V>>
	where
		H: ValueTree<Value = V> + ?Sized,
	{
		match &self.current {
			Presentation::Uninitialized | Presentation::Invalid | Presentation::EmptyOptional => None,
			Presentation::Label(label) => match self.options.case_labels {
				CaseLabelPolicy::Child if idx == 0 => Some(Child::Case(label)),
				CaseLabelPolicy::Child | CaseLabelPolicy::SummaryOnly => None,
			},
			Presentation::Payload(payload) => target.child_at(payload, idx).map(Child::Value),
		}
	}

	/// Index of the payload child called `name`.
	pub fn index_of_child<H>(&self, target: &H, name: &str) -> Option<usize>
	where
		H: ValueTree<Value = V> + ?Sized,
	{
		match &self.current {
			Presentation::Payload(payload) => target.index_of_child(payload, name),
			Presentation::Uninitialized | Presentation::Invalid | Presentation::EmptyOptional | Presentation::Label(_) => None,
		}
	}

	/// Whether expansion can yield children.
	pub fn might_have_children<H>(&self, target: &H) -> bool
	where
		H: ValueTree<Value = V> + ?Sized,
	{
		match &self.current {
			Presentation::Uninitialized | Presentation::Invalid | Presentation::EmptyOptional => false,
			Presentation::Label(_) => self.options.case_labels == CaseLabelPolicy::Child,
			Presentation::Payload(payload) => target.might_have_children(payload),
		}
	}

	/// Summary computed from the cached resolution of the last refresh.
	pub fn summary<H>(&self, target: &H) -> String
	where
		H: ValueTree<Value = V> + ?Sized,
	{
		let Some(resolution) = &self.resolution else {
			return render_diagnostic(self.diagnostic.as_deref().unwrap_or("value was never refreshed"));
		};

		render_summary(resolution, || {
			resolution.payload.as_ref()?;
			match &self.current {
				Presentation::Label(label) => Some(label.summary().to_owned()),
				Presentation::Payload(payload) => target.summary(payload),
				Presentation::Invalid => self.diagnostic.as_deref().map(render_diagnostic),
				Presentation::Uninitialized | Presentation::EmptyOptional => None,
			}
		})
	}
}

// One level only: the inner resolution is never followed further.
fn nested_case<H: Target + ?Sized>(target: &H, payload: &H::Value) -> Option<CaseLabel> {
	match current_enum_value(target, payload) {
		Ok(inner) if inner.is_bare_case() => Some(CaseLabel::new(&inner.case_name)),
		_ => None,
	}
}
