use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use quill_diagnostics::Emitter;
use quill_ls::{NoOperators, OperatorSource, StaticOperatorSource};
use quill_operators::{
    catalog, lifted_signature, OperandShape, OperatorError, OperatorKind, OperatorOrigin,
    TypeCategory,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quillc")]
#[command(about = "Quill - 运算符补全元数据工具", version)]
struct Cli {
    /// 输出调试日志
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 按展示顺序列出所有可重载运算符
    Operators {
        /// 关闭颜色输出
        #[arg(long)]
        no_color: bool,
    },

    /// 判断运算符声明能否提升到可空值类型
    Lift {
        /// 运算符成员名，如 op_Addition
        member_name: String,

        /// 参数类型类别，逗号分隔
        #[arg(long, value_delimiter = ',', required = true)]
        params: Vec<CategoryArg>,

        /// 返回类型类别
        #[arg(long)]
        returns: CategoryArg,

        /// 声明由编译器合成而非用户编写
        #[arg(long)]
        intrinsic: bool,
    },

    /// 在 stdio 上启动语言服务器
    Lsp {
        /// 运算符声明 JSON 文件，作为补全候选
        #[arg(long)]
        operators: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CategoryArg {
    Value,
    #[value(alias = "boolean")]
    Bool,
    Reference,
}

impl From<CategoryArg> for TypeCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Value => TypeCategory::Value,
            CategoryArg::Bool => TypeCategory::Boolean,
            CategoryArg::Reference => TypeCategory::Reference,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout 留给 LSP 协议，日志一律写 stderr
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Operators { no_color } => {
            if no_color {
                colored::control::set_override(false);
            }
            cmd_operators(&mut io::stdout().lock())?;
        }
        Commands::Lift {
            member_name,
            params,
            returns,
            intrinsic,
        } => {
            let result = cmd_lift(
                &mut io::stdout().lock(),
                &member_name,
                &params,
                returns,
                intrinsic,
            );
            if let Err(err) = result {
                match err.downcast_ref::<OperatorError>() {
                    Some(op_err) => {
                        Emitter::new().emit(&op_err.to_diagnostic());
                        process::exit(1);
                    }
                    None => return Err(err),
                }
            }
        }
        Commands::Lsp { operators } => cmd_lsp(operators).await?,
    }

    Ok(())
}

/// 未设置 `RUST_LOG` 时使用的过滤级别
fn default_log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

fn log_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)))
}

/// 列出运算符目录
fn cmd_operators(out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "{}",
        format!(
            "{:>3}  {:<6} {:<8} {:<15} {}",
            "#", "sign", "example", "position", "member"
        )
        .bold()
    )?;
    for d in catalog() {
        writeln!(
            out,
            "{:>3}  {:<6} {:<8} {:<15} {}",
            d.sort_index,
            d.sign.green(),
            d.usage_example,
            d.position.label(),
            d.kind.member_name().bright_black()
        )?;
    }
    Ok(())
}

/// 提升判定命令
///
/// 名称无法识别时返回 [`OperatorError`]，由调用方输出诊断
fn cmd_lift(
    out: &mut impl Write,
    member_name: &str,
    params: &[CategoryArg],
    returns: CategoryArg,
    intrinsic: bool,
) -> Result<()> {
    let kind = OperatorKind::from_member_name(member_name)?;

    let origin = if intrinsic {
        OperatorOrigin::Intrinsic
    } else {
        OperatorOrigin::UserDefined
    };
    let parameters: Vec<TypeCategory> = params.iter().copied().map(Into::into).collect();
    let shape = OperandShape::new(parameters, returns.into()).with_origin(origin);
    debug!(?kind, ?shape, "checking liftability");

    match lifted_signature(kind, &shape) {
        Some(sig) => {
            writeln!(out, "✅ {} is liftable", member_name.bold())?;
            writeln!(out, "   lifted: {}", sig.to_string().green())?;
        }
        None => writeln!(out, "❌ {} is not liftable", member_name.bold())?,
    }
    Ok(())
}

/// 启动语言服务器
async fn cmd_lsp(operators: Option<PathBuf>) -> Result<()> {
    let source: Arc<dyn OperatorSource> = match operators {
        Some(path) => {
            let source = StaticOperatorSource::from_file(&path)?;
            info!(
                "loaded {} operator declarations from {}",
                source.operators().len(),
                path.display()
            );
            Arc::new(source)
        }
        None => Arc::new(NoOperators),
    };

    quill_ls::run_server(source).await;
    Ok(())
}
