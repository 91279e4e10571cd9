/*!
 * Bearer 凭证认证中间件
 *
 * 校验认证服务签发的 HS256 access token，通过后把 `BearerClaims` 放入请求扩展。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::{web, App};
 * use crate::middlewares::RequireBearer;
 *
 * App::new()
 *     .app_data(web::Data::new(config.auth.clone()))
 *     .service(
 *         web::scope("/ai-tutor")
 *             .wrap(RequireBearer)
 *             .route("", web::post().to(handler)),
 *     );
 *
 * async fn handler(req: HttpRequest) -> HttpResponse {
 *     let claims = RequireBearer::extract_claims(&req);
 *     // ...
 * }
 * ```
 *
 * ## 认证流程
 *
 * 1. 客户端在请求头中包含 `Authorization: Bearer <JWT_TOKEN>`
 * 2. 中间件使用 `auth.jwt_secret` 校验签名与过期时间
 * 3. 校验通过则写入请求扩展并继续处理
 * 4. 令牌缺失或无效时返回 401 `{error}`
 */

use std::rc::Rc;

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::Method,
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{debug, error, info};

use crate::config::AuthConfig;
use crate::models::ErrorResponse;
use crate::utils::jwt::{BearerClaims, JwtUtils};

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone)]
pub struct RequireBearer;

fn unauthorized(message: &str) -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse::new(message))
}

fn extract_and_validate(req: &ServiceRequest) -> Result<BearerClaims, &'static str> {
    let token = req
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or("Missing or invalid Authorization header")?;

    let secret = req
        .app_data::<web::Data<AuthConfig>>()
        .map(|auth| auth.jwt_secret.clone())
        .unwrap_or_default();
    if secret.is_empty() {
        error!("auth.jwt_secret is not configured, rejecting bearer token");
        return Err("Authentication is not configured");
    }

    JwtUtils::verify_bearer(token, &secret).map_err(|err| {
        info!("Bearer token validation failed: {}", err);
        "Invalid or expired token"
    })
}

impl<S, B> Transform<S, ServiceRequest> for RequireBearer
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireBearerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireBearerMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireBearerMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireBearerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 预检请求直接放行
            if req.method() == Method::OPTIONS {
                return Ok(req.into_response(HttpResponse::Ok().finish().map_into_right_body()));
            }

            match extract_and_validate(&req) {
                Ok(claims) => {
                    debug!("Bearer authentication successful for subject: {}", claims.sub);
                    req.extensions_mut().insert(claims);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "Bearer authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(unauthorized(err).map_into_right_body()))
                }
            }
        })
    }
}

impl RequireBearer {
    /// 从请求扩展中取出已验证的 Claims
    pub fn extract_claims(req: &actix_web::HttpRequest) -> Option<BearerClaims> {
        req.extensions().get::<BearerClaims>().cloned()
    }
}
