//! `vuln` sub-command: vulnerability database queries.

use crate::cli::VulnArgs;
use crate::client::{AppContext, CliError, CliResult};
use crate::output::print_json;

/// Single active vulnerability query, resolved from the option flags by fixed
/// priority order.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum VulnRequest {
    Init,
    InitStatus,
    Cve(String),
    Bid(u32),
    ExploitDb(u32),
    Product {
        product: String,
        version: Option<String>,
    },
}

impl VulnRequest {
    /// Resolve the flags into the single active branch. Priority order is
    /// init, init-status, cve, bid, exploit-db, product; the first satisfied
    /// branch wins and later conflicting flags are ignored.
    pub(crate) fn from_args(args: VulnArgs) -> CliResult<Self> {
        if args.init {
            return Ok(Self::Init);
        }
        if args.init_status {
            return Ok(Self::InitStatus);
        }
        if let Some(cve) = args.cve {
            return Ok(Self::Cve(cve));
        }
        if let Some(bid) = args.bid {
            return Ok(Self::Bid(bid));
        }
        if let Some(id) = args.exploit_db {
            return Ok(Self::ExploitDb(id));
        }
        if let Some(product) = args.product {
            return Ok(Self::Product {
                product,
                version: args.product_version,
            });
        }
        Err(CliError::validation(
            "one of --init, --init_status, --cve, --bid, --exploit_db or --product is required",
        ))
    }
}

pub(crate) async fn handle_vuln(ctx: &AppContext, args: VulnArgs) -> CliResult<()> {
    let body = match VulnRequest::from_args(args)? {
        VulnRequest::Init => ctx.post("/vuln/init").await?,
        VulnRequest::InitStatus => ctx.get("/vuln/init-status").await?,
        VulnRequest::Cve(cve) => ctx.get(&format!("/vuln/cve/{cve}")).await?,
        VulnRequest::Bid(bid) => ctx.get(&format!("/vuln/bid/{bid}")).await?,
        VulnRequest::ExploitDb(id) => ctx.get(&format!("/vuln/exploit/{id}")).await?,
        VulnRequest::Product {
            product,
            version: None,
        } => ctx.get(&format!("/vuln/products/{product}")).await?,
        VulnRequest::Product {
            product,
            version: Some(version),
        } => {
            ctx.get(&format!("/vuln/products/{product}/{version}"))
                .await?
        }
    };
    print_json(&body)
}
