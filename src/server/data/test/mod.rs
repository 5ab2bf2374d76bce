mod course;
mod course_type;
mod university;
