// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// schriftwerk-transform: The operation menu and the dispatcher behind it.
//
// Text operations are pure functions in `text`. Grammar correction goes
// through the `GrammarChecker` seam so the LanguageTool client can be swapped
// out. Conversions hand off to `schriftwerk-document`.

pub mod dispatcher;
pub mod grammar;
pub mod operation;
pub mod text;

pub use dispatcher::{Dispatcher, Outcome};
pub use grammar::languagetool::LanguageToolClient;
pub use grammar::{GrammarChecker, GrammarMatch};
pub use operation::Operation;
