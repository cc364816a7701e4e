use clap::Args;
use personnel_app::{
    database::{self, Db},
    domain::departments::{DepartmentsService, PgDepartmentsService, data::NewDepartment},
};

#[derive(Debug, Args)]
pub(crate) struct CreateDepartmentArgs {
    /// Department name
    #[arg(long)]
    name: String,

    /// Optional free-text description
    #[arg(long)]
    description: Option<String>,

    /// Id of the user recorded as creator
    #[arg(long)]
    created_by: i32,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateDepartmentArgs) -> Result<(), String> {
    if args.name.trim().is_empty() {
        return Err("name cannot be empty".to_string());
    }

    let pool = database::connect(&args.database_url, 1)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let department = PgDepartmentsService::new(Db::new(pool))
        .create_department(NewDepartment {
            name: args.name,
            description: args.description,
            created_by: args.created_by,
        })
        .await
        .map_err(|error| format!("failed to create department: {error}"))?;

    println!("dept_id: {}", department.id);
    println!("dept_name: {}", department.name);

    Ok(())
}
