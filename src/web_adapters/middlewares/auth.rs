use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_session::SessionExt;
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web::Data,
    Error, HttpMessage,
};
use db_adapters::user_adapter::{UserAdapter, UserQuery};
use futures::future::LocalBoxFuture;
use sea_orm::DbConn;

use crate::users::types::USER_ID_KEY;

/// Resolves the session to a `user::Model` in request extensions. Handlers
/// receive it as `Option<ReqData<user::Model>>`; `None` means unauthenticated.
pub struct AuthenticateUser;

impl<S: 'static, B> Transform<S, ServiceRequest> for AuthenticateUser
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticateUserMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticateUserMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthenticateUserMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthenticateUserMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        Box::pin(async move {
            let session = req.get_session();
            if let Ok(Some(user_id)) = session.get::<uuid::Uuid>(USER_ID_KEY) {
                if let Some(db) = req.app_data::<Data<DbConn>>() {
                    match UserAdapter::init(db).get_by_id(user_id).await {
                        Ok(Some(user)) => {
                            req.extensions_mut().insert(user);
                        }
                        Ok(None) => (),
                        Err(e) => {
                            tracing::event!(target: "backend", tracing::Level::ERROR, "Failed to load the session user: {:?}", e);
                        }
                    }
                }
            }
            svc.call(req).await
        })
    }
}
