use crate::error::InputError;

/// A grid size followed by the sites to open, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
	pub n: usize,
	pub sites: Vec<(usize, usize)>,
}

pub fn parse_line_of_nums(line: &str, line_no: usize) -> Result<Vec<usize>, InputError> {
	line.split_whitespace()
		.map(|token| token.parse::<usize>().map_err(|_| InputError::BadNumber {
			line: line_no,
			token: token.to_string(),
		}))
		.collect()
}

/// Reads the text format: one line with `n`, then one `row col` pair per line.
/// Blank lines are skipped. `first_line` is the 1-based number of the first
/// line the iterator yields, for error messages.
pub fn parse_replay<I: Iterator<Item = String>>(lines_iter: I, first_line: usize) -> Result<Replay, InputError> {
	let mut n = None;
	let mut sites = Vec::new();
	for (offset, line) in lines_iter.enumerate() {
		let line_no = first_line + offset;
		let nums = parse_line_of_nums(&line, line_no)?;
		if nums.is_empty() {
			continue;
		}
		let expected = if n.is_none() { 1 } else { 2 };
		if nums.len() != expected {
			return Err(InputError::Arity { line: line_no, expected, found: nums.len() });
		}
		if n.is_none() {
			n = Some(nums[0]);
		} else {
			sites.push((nums[0], nums[1]));
		}
	}
	let n = n.ok_or(InputError::MissingSize)?;
	Ok(Replay { n, sites })
}
