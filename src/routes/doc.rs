use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    confirm::ConfirmationState,
    dto::{
        dashboard::{DashboardData, OrderSummaryDto},
        orders::{LineItemDto, OrderDetail, PaymentDto, RecordPaymentRequest, SubmitOrderRequest, SubmitOutcome},
        suggestions::{SuggestionDto, SuggestionList},
    },
    models::{LineItem, LineItemDraft, Operator, Order, OrderDraft, Payment},
    response::{ApiResponse, Meta},
    routes::{auth, dashboard, health, orders, suggestions},
    vocab::SuggestionKind,
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        auth::register,
        dashboard::dashboard,
        orders::create_order,
        orders::get_order,
        orders::update_order,
        orders::delete_order,
        orders::record_payment,
        suggestions::list_suggestions
    ),
    components(
        schemas(
            Operator,
            Order,
            LineItem,
            Payment,
            OrderDraft,
            LineItemDraft,
            ConfirmationState,
            SuggestionKind,
            SubmitOrderRequest,
            SubmitOutcome,
            OrderDetail,
            LineItemDto,
            PaymentDto,
            RecordPaymentRequest,
            OrderSummaryDto,
            DashboardData,
            SuggestionDto,
            SuggestionList,
            Meta,
            ApiResponse<SubmitOutcome>,
            ApiResponse<OrderDetail>,
            ApiResponse<DashboardData>,
            ApiResponse<SuggestionList>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Operator authentication"),
        (name = "Dashboard", description = "Aggregated order views"),
        (name = "Orders", description = "Order entry, editing and payments"),
        (name = "Suggestions", description = "Controlled vocabulary for form picklists"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
