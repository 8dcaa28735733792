//! 估算微服务部署在 AWS 上的月度成本

use clap::Parser;
use item_catalog::costs::{estimate, render_report, Usage, US_EAST_RATES};

#[derive(Parser, Debug)]
#[command(name = "estimate_costs")]
#[command(about = "Estimate AWS costs for microservices deployment")]
struct Cli {
    /// vCPU per task
    #[arg(long, default_value_t = 0.25)]
    vcpu: f64,

    /// Memory in GB per task
    #[arg(long, default_value_t = 0.5)]
    memory: f64,

    /// Number of tasks
    #[arg(long, default_value_t = 2)]
    tasks: u32,

    /// Hours per day
    #[arg(long, default_value_t = 24, value_parser = clap::value_parser!(u32).range(1..=24))]
    hours: u32,

    /// Days per month
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..))]
    days: u32,

    /// Requests per day
    #[arg(long, default_value_t = 10_000)]
    requests: u64,

    /// Number of ECR repositories
    #[arg(long, default_value_t = 2)]
    repositories: u32,

    /// ECR storage in GB
    #[arg(long, default_value_t = 1.0)]
    storage: f64,

    /// CloudWatch logs in GB per month
    #[arg(long, default_value_t = 1.0)]
    logs: f64,

    /// Number of CloudWatch metrics
    #[arg(long, default_value_t = 10)]
    metrics: u32,

    /// Number of CloudWatch dashboards
    #[arg(long, default_value_t = 1)]
    dashboards: u32,

    /// Data transfer out in GB per month
    #[arg(long = "data-out", default_value_t = 10.0)]
    data_out: f64,

    /// Output in JSON format
    #[arg(long)]
    json: bool,
}

impl From<&Cli> for Usage {
    fn from(cli: &Cli) -> Self {
        Usage {
            vcpu: cli.vcpu,
            memory_gb: cli.memory,
            tasks: cli.tasks,
            hours_per_day: cli.hours,
            days_per_month: cli.days,
            requests_per_day: cli.requests,
            repositories: cli.repositories,
            storage_gb: cli.storage,
            log_gb: cli.logs,
            metrics: cli.metrics,
            dashboards: cli.dashboards,
            data_out_gb: cli.data_out,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let usage = Usage::from(&cli);
    let result = estimate(&US_EAST_RATES, &usage);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_report(&usage, &result));
    }
    Ok(())
}
