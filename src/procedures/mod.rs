/*!
Procedures for checking arguments.

- A [tableau](crate::procedures::tableau) (or truth tree) expands a wff until every branch is closed by a contradiction, or no rule adds anything to an open branch.
- A [natural deduction](crate::procedures::deduction) search derives the conclusion of an argument from its premises by forward-chaining rules of inference.
- [Arguments](crate::procedures::argument) are checked by either procedure.

Each procedure is written as a method on a [context](crate::context), and records a [report](crate::reports) on the context when finished.
*/

pub mod argument;
pub mod deduction;
pub mod tableau;
