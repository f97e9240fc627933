//! Test pack dispatch
//!
//! A pack is a named subset-selection policy for which Playwright tests to
//! execute. The set is closed; each variant maps to exactly one invocation.

use clap::ValueEnum;

use crate::exec::{Invocation, Invoker};

/// Exit code for an unrecognized pack name
pub const UNKNOWN_PACK_CODE: i32 = 2;

/// The closed set of test packs
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Pack {
    /// High- and medium-risk tagged tests
    Smoke,
    /// Every test, no filter
    All,
    /// UI project only
    Ui,
    /// API project only
    Api,
}

impl Pack {
    pub fn name(&self) -> &'static str {
        match self {
            Pack::Smoke => "smoke",
            Pack::All => "all",
            Pack::Ui => "ui",
            Pack::Api => "api",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "smoke" => Some(Pack::Smoke),
            "all" => Some(Pack::All),
            "ui" => Some(Pack::Ui),
            "api" => Some(Pack::Api),
            _ => None,
        }
    }

    /// The Playwright invocation this pack stands for
    pub fn invocation(&self) -> Invocation {
        match self {
            Pack::Smoke => Invocation::new(
                "npx",
                ["playwright", "test", "--grep", "@risk:high|@risk:medium"],
            ),
            Pack::All => Invocation::new("npx", ["playwright", "test"]),
            Pack::Ui => Invocation::new("npx", ["playwright", "test", "--project=ui-chromium"]),
            Pack::Api => Invocation::new("npx", ["playwright", "test", "--project=api"]),
        }
    }
}

/// Dispatch a pack by name and return the runner's exit code
///
/// clap already validates `--pack` against the enum, but dispatch defends on
/// its own: an unknown name gets a corrective message and exit code 2
/// without touching any external tool.
pub async fn run(name: &str, invoker: &dyn Invoker) -> i32 {
    let Some(pack) = Pack::from_name(name) else {
        eprintln!("Unknown pack: {name}. Use one of: smoke, all, ui, api.");
        return UNKNOWN_PACK_CODE;
    };

    tracing::debug!(pack = pack.name(), "dispatching test pack");
    invoker.invoke(&pack.invocation()).await
}
