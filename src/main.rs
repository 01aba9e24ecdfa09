use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use kenya_payroll::calculation::TaxCalculator;
use kenya_payroll::logging::init_logging;
use kenya_payroll::models::Employee;
use kenya_payroll::quadratic::solve_quadratic;
use kenya_payroll::shell::{Shell, parse_amount};

#[derive(Parser)]
#[command(name = "kenya-payroll")]
#[command(version)]
#[command(about = "Kenyan payroll deductions calculator (PAYE, NSSF, NHIF, Housing Levy)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, help = "Enable verbose output", global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Run the interactive payroll menu (default)")]
    Menu,

    #[command(about = "Print a single payslip")]
    Payslip {
        #[arg(long, help = "Employee identifier")]
        id: String,

        #[arg(long, help = "Employee name")]
        name: String,

        #[arg(long, allow_hyphen_values = true, help = "Monthly basic salary")]
        basic: String,

        #[arg(
            long,
            default_value = "0",
            allow_hyphen_values = true,
            help = "Monthly allowances"
        )]
        allowances: String,

        #[arg(long, help = "Print the payslip as JSON")]
        json: bool,
    },

    #[command(about = "Solve ax² + bx + c = 0", allow_negative_numbers = true)]
    Quadratic {
        #[arg(help = "Coefficient a")]
        a: f64,

        #[arg(help = "Coefficient b")]
        b: f64,

        #[arg(help = "Coefficient c")]
        c: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => run_menu(),
        Commands::Payslip {
            id,
            name,
            basic,
            allowances,
            json,
        } => {
            let basic = parse_amount("basic_salary", &basic)?;
            let allowances = parse_amount("allowances", &allowances)?;
            print_payslip(Employee::new(id, name, basic, allowances), json)
        }
        Commands::Quadratic { a, b, c } => {
            println!("{}", solve_quadratic(a, b, c)?);
            Ok(())
        }
    }
}

fn run_menu() -> Result<()> {
    let calculator = TaxCalculator::kenya()?;
    let stdin = io::stdin();
    let mut shell = Shell::new(calculator, stdin.lock(), io::stdout().lock());
    shell.run().context("Payroll menu failed")
}

fn print_payslip(employee: Employee, json: bool) -> Result<()> {
    let calculator = TaxCalculator::kenya()?;
    let payslip = calculator.payslip(&employee)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&payslip)?);
    } else {
        println!("{payslip}");
    }

    if payslip.deductions.net < Decimal::ZERO {
        tracing::warn!(employee_id = %employee.id, "Deductions exceed gross pay");
    }

    Ok(())
}
