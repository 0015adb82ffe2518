use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct DepartmentDoc { pub id: i64, pub name: String }

#[derive(ToSchema)]
pub struct StudentDoc {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub department: DepartmentDoc,
}

#[derive(ToSchema)]
pub struct StudentDtoDoc {
    pub firstname: String,
    pub lastname: String,
    #[schema(rename = "departmentId")]
    pub department_id: i64,
}

#[derive(ToSchema)]
pub struct CountDoc { pub count: usize }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::students::list_students,
        crate::routes::students::get_student,
        crate::routes::students::create_student,
        crate::routes::students::update_student,
        crate::routes::students::remove_student,
        crate::routes::departments::list_departments,
        crate::routes::departments::get_department,
        crate::routes::departments::department_students,
        crate::routes::departments::department_count,
    ),
    components(
        schemas(
            HealthResponse,
            DepartmentDoc,
            StudentDoc,
            StudentDtoDoc,
            CountDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "students", description = "Student CRUD"),
        (name = "departments", description = "Department lookups"),
    )
)]
pub struct ApiDoc;
