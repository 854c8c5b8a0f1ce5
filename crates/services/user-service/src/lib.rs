//! User Service Library
//!
//! This crate provides user account management via gRPC: registration,
//! lookup, paginated listing, profile update and password verification.

pub mod config;
pub mod grpc;
pub mod infra;
pub mod repository;
pub mod usecase;

use std::net::SocketAddr;
use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tonic::transport::Server;
use tracing::info;

use crate::config::UserServiceConfig;
use crate::grpc::UserGrpcService;
use crate::infra::Database;
use crate::repository::UserStore;
use crate::usecase::UserManager;

/// Wire the repository, use case and gRPC adapter over one connection pool.
pub fn build_grpc_service(db: DatabaseConnection) -> UserGrpcService {
    let user_repo = Arc::new(UserStore::new(db));
    let usecase = Arc::new(UserManager::new(user_repo));
    UserGrpcService::new(usecase)
}

/// Connect the database, ensure the schema and serve gRPC until Ctrl+C.
pub async fn run_server(config: UserServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database).await?;
    db.ensure_schema().await?;

    let grpc_service = build_grpc_service(db.get_connection());

    let addr: SocketAddr = config.server.bind_address().parse()?;
    info!("User service listening on {}", addr);

    Server::builder()
        .add_service(proto::UserServiceServer::new(grpc_service))
        .serve_with_shutdown(addr, async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Received shutdown signal, stopping user service...");
        })
        .await?;

    Ok(())
}
