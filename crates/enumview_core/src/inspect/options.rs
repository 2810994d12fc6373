/// How a payload-less, non-optional case shows up among children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseLabelPolicy {
	/// Expose the case label as the single child.
	#[default]
	Child,
	/// Expose no children; the label appears only in the summary.
	SummaryOnly,
}

/// Behavior switches for tagged-union presentation.
#[derive(Debug, Clone)]
pub struct PresentationOptions {
	/// Child policy for payload-less cases.
	pub case_labels: CaseLabelPolicy,
	/// Show `some(bare case)` optionals as the bare case label.
	pub collapse_nested_cases: bool,
}

impl Default for PresentationOptions {
	fn default() -> Self {
		Self {
			case_labels: CaseLabelPolicy::Child,
			collapse_nested_cases: true,
		}
	}
}

impl PresentationOptions {
	/// Preset that keeps case labels out of the child list.
	pub fn summary_only() -> Self {
		Self {
			case_labels: CaseLabelPolicy::SummaryOnly,
			collapse_nested_cases: true,
		}
	}
}
