//! 部署成本估算
//!
//! 按美东 (N. Virginia) 区域单价估算两个服务在 Fargate 上运行一个月的费用。

use serde::Serialize;
use std::fmt::Write;

/// 单价表
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    /// 每 vCPU 小时
    pub fargate_cpu: f64,
    /// 每 GB 小时
    pub fargate_memory: f64,
    pub alb_hourly: f64,
    /// 每 LCU 小时
    pub alb_lcu: f64,
    /// 每 GB 月
    pub ecr_storage: f64,
    /// 每 GB
    pub cloudwatch_logs: f64,
    /// 每个指标每月
    pub cloudwatch_metric: f64,
    /// 每个仪表盘每月
    pub cloudwatch_dashboard: f64,
    /// 每 GB 出流量
    pub data_transfer_out: f64,
}

pub const US_EAST_RATES: Rates = Rates {
    fargate_cpu: 0.04048,
    fargate_memory: 0.004445,
    alb_hourly: 0.0225,
    alb_lcu: 0.008,
    ecr_storage: 0.10,
    cloudwatch_logs: 0.50,
    cloudwatch_metric: 0.30,
    cloudwatch_dashboard: 3.00,
    data_transfer_out: 0.09,
};

impl Default for Rates {
    fn default() -> Self {
        US_EAST_RATES
    }
}

/// 用量参数
#[derive(Debug, Clone, PartialEq)]
pub struct Usage {
    pub vcpu: f64,
    pub memory_gb: f64,
    pub tasks: u32,
    pub hours_per_day: u32,
    pub days_per_month: u32,
    pub requests_per_day: u64,
    pub repositories: u32,
    pub storage_gb: f64,
    pub log_gb: f64,
    pub metrics: u32,
    pub dashboards: u32,
    pub data_out_gb: f64,
}

impl Default for Usage {
    fn default() -> Self {
        Self {
            vcpu: 0.25,
            memory_gb: 0.5,
            tasks: 2,
            hours_per_day: 24,
            days_per_month: 30,
            requests_per_day: 10_000,
            repositories: 2,
            storage_gb: 1.0,
            log_gb: 1.0,
            metrics: 10,
            dashboards: 1,
            data_out_gb: 10.0,
        }
    }
}

impl Usage {
    fn hours_per_month(&self) -> f64 {
        f64::from(self.hours_per_day) * f64::from(self.days_per_month)
    }
}

/// 月度估算结果，字段顺序即 JSON 输出顺序
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostEstimate {
    pub fargate: f64,
    pub alb: f64,
    pub ecr: f64,
    pub cloudwatch: f64,
    pub data_transfer: f64,
    pub total: f64,
}

pub fn fargate_cost(rates: &Rates, usage: &Usage) -> f64 {
    let task_hours = f64::from(usage.tasks) * usage.hours_per_month();
    rates.fargate_cpu * usage.vcpu * task_hours + rates.fargate_memory * usage.memory_gb * task_hours
}

/// 1 LCU 约等于持续一小时每秒 1 个请求
///
/// `hours_per_day` 须在 1..=24 之间，命令行入口负责校验。
pub fn alb_cost(rates: &Rates, usage: &Usage) -> f64 {
    let hours_per_month = usage.hours_per_month();
    let requests_per_second =
        usage.requests_per_day as f64 / (f64::from(usage.hours_per_day) * 3600.0);
    rates.alb_hourly * hours_per_month + rates.alb_lcu * requests_per_second * hours_per_month
}

/// 只按存储量计费，仓库数量不影响价格
pub fn ecr_cost(rates: &Rates, usage: &Usage) -> f64 {
    rates.ecr_storage * usage.storage_gb
}

pub fn cloudwatch_cost(rates: &Rates, usage: &Usage) -> f64 {
    rates.cloudwatch_logs * usage.log_gb
        + rates.cloudwatch_metric * f64::from(usage.metrics)
        + rates.cloudwatch_dashboard * f64::from(usage.dashboards)
}

pub fn data_transfer_cost(rates: &Rates, usage: &Usage) -> f64 {
    rates.data_transfer_out * usage.data_out_gb
}

pub fn estimate(rates: &Rates, usage: &Usage) -> CostEstimate {
    let fargate = fargate_cost(rates, usage);
    let alb = alb_cost(rates, usage);
    let ecr = ecr_cost(rates, usage);
    let cloudwatch = cloudwatch_cost(rates, usage);
    let data_transfer = data_transfer_cost(rates, usage);

    CostEstimate {
        fargate,
        alb,
        ecr,
        cloudwatch,
        data_transfer,
        total: fargate + alb + ecr + cloudwatch + data_transfer,
    }
}

pub fn format_cost(cost: f64) -> String {
    format!("${:.2}", cost)
}

/// 文本报告，用量中的小数总是带小数点输出（`1.0GB`）
pub fn render_report(usage: &Usage, estimate: &CostEstimate) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "AWS Cost Estimate for Microservices Deployment");
    let _ = writeln!(out, "==============================================");
    let _ = writeln!(
        out,
        "ECS Fargate ({} tasks, {:?} vCPU, {:?}GB memory): {}",
        usage.tasks,
        usage.vcpu,
        usage.memory_gb,
        format_cost(estimate.fargate)
    );
    let _ = writeln!(out, "Application Load Balancer: {}", format_cost(estimate.alb));
    let _ = writeln!(
        out,
        "ECR ({} repositories, {:?}GB storage): {}",
        usage.repositories,
        usage.storage_gb,
        format_cost(estimate.ecr)
    );
    let _ = writeln!(
        out,
        "CloudWatch (logs: {:?}GB, metrics: {}, dashboards: {}): {}",
        usage.log_gb,
        usage.metrics,
        usage.dashboards,
        format_cost(estimate.cloudwatch)
    );
    let _ = writeln!(
        out,
        "Data Transfer ({:?}GB out): {}",
        usage.data_out_gb,
        format_cost(estimate.data_transfer)
    );
    let _ = writeln!(out, "----------------------------------------------");
    let _ = writeln!(out, "Total Estimated Monthly Cost: {}", format_cost(estimate.total));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Note: These estimates are based on US East (N. Virginia) region pricing and may vary based on actual usage."
    );
    let _ = writeln!(
        out,
        "For more accurate estimates, use the AWS Pricing Calculator: https://calculator.aws"
    );
    out
}
