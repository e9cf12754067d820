//! Common source fixtures for tests.

// Compose documents
pub const COMPOSE_V2: &str = r#"version: "2"
services:
  web:
    image: nginx:latest
    ports:
      - "80:80"
      - "443:443"
    depends_on:
      - db
  db:
    image: postgres:13
    environment:
      POSTGRES_PASSWORD: example
networks:
  front:
    driver: bridge
volumes:
  data:
"#;

pub const COMPOSE_V1: &str = r#"web:
  image: nginx
  net: host
  links:
    - db
db:
  image: postgres
"#;

pub const COMPOSE_WITH_COMMENTS: &str = r#"# top comment
version: '3.8'

services:
  # the api
  api:
    build:
      context: ./api   # relative to this file
      dockerfile: Dockerfile.dev
    command: |
      sh -c "echo start
      && run"
    healthcheck:
      test: ["CMD", "curl", "-f", "http://localhost"]
      interval: 30s
"#;

pub const BUILD_FRAGMENT: &str = "build:\n  context: .\n";

// Dockerfiles
pub const MULTI_STAGE: &str = r#"# syntax=docker/dockerfile:1
FROM node:14 AS builder
WORKDIR /src
COPY package.json .
RUN npm ci && \
    npm run build

FROM golang:1.22 AS tools
RUN go install example.com/tool@latest

FROM alpine:3.19
COPY --from=builder /src/dist /app
COPY --from=tools /go/bin/tool /usr/local/bin/
EXPOSE 8080
CMD ["/app/server"]
"#;
