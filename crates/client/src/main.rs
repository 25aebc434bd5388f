//! projectapi-client CLI entry point.

use clap::Parser;
use projectapi_client::cli::projects::ProjectsAction;
use projectapi_client::cli::{Cli, Commands, OutputFormat};
use projectapi_client::client::ProjectApiClient;
use projectapi_client::output::{format_project, format_projects};
use projectapi_core::project::{CreateProjectRequest, Project, UpdateProjectRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = ProjectApiClient::new(&cli.base_url);

    match cli.command {
        Commands::Projects(projects_cmd) => match projects_cmd.action {
            ProjectsAction::List => {
                let projects = client.list_projects().await?;
                println!("{}", format_projects(&projects, cli.format));
            }
            ProjectsAction::Create {
                consultant_id,
                client_id,
                name,
                description,
                start_date,
                end_date,
            } => {
                let project = client
                    .create_project(&CreateProjectRequest {
                        consultant_id,
                        client_id,
                        name,
                        description,
                        start_date,
                        end_date,
                    })
                    .await?;
                print_changed("Created", &project, cli.format);
            }
            ProjectsAction::Get { id } => {
                let project = client.get_project(&id).await?;
                println!("{}", format_project(&project, cli.format));
            }
            ProjectsAction::Update {
                id,
                name,
                description,
                start_date,
                end_date,
            } => {
                let update = UpdateProjectRequest {
                    name,
                    description,
                    start_date,
                    end_date,
                };
                if update.is_empty() && !cli.quiet {
                    eprintln!("No fields given, the project will be rewritten unchanged");
                }
                let project = client.update_project(&id, &update).await?;
                print_changed("Updated", &project, cli.format);
            }
            ProjectsAction::Delete { id } => {
                client.delete_project(&id).await?;
                if !cli.quiet {
                    println!("Deleted project {}", id);
                }
            }
        },
    }

    Ok(())
}

/// Print a created or updated project, labelled in pretty mode.
fn print_changed(label: &str, project: &Project, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{}", format_project(project, format)),
        OutputFormat::Pretty => println!("{}:\n{}", label, format_project(project, format)),
    }
}
